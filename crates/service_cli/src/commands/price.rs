//! Price command implementation.

use tracing::info;

use pricer_core::MarketSnapshot;
use pricer_models::analytical::BlackScholes;
use pricer_pricing::{ChooserMethod, MonteCarloConfig};

use super::{MethodArg, PolicyArg};
use crate::Result;

/// Inputs of the `price` command, mirrored from the CLI definition.
pub struct PriceArgs {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub dividend_yield: f64,
    pub t1: f64,
    pub t2: f64,
    pub method: MethodArg,
    pub paths: usize,
    pub seed: u64,
    pub policy: PolicyArg,
}

/// Run the price command.
pub fn run(args: PriceArgs) -> Result<()> {
    let snapshot = MarketSnapshot::new(
        args.spot,
        args.strike,
        args.rate,
        args.volatility,
        args.dividend_yield,
        args.t1,
        args.t2,
    )?;

    let method = match args.method {
        MethodArg::Analytic => ChooserMethod::Analytic,
        MethodArg::Mc => ChooserMethod::MonteCarlo(
            MonteCarloConfig::builder()
                .n_paths(args.paths)
                .seed(args.seed)
                .policy(args.policy.into())
                .build()?,
        ),
    };

    info!(
        spot = args.spot,
        strike = args.strike,
        t1 = args.t1,
        t2 = args.t2,
        "pricing chooser"
    );

    let result = method.price(&snapshot)?;
    let bs = BlackScholes::from_snapshot(&snapshot);
    let call = bs.price_call(snapshot.strike(), snapshot.t2());
    let put = bs.price_put(snapshot.strike(), snapshot.t2());

    println!("chooser price      : {:.4}", result.price);
    if let Some(se) = result.std_error {
        println!("standard error     : {:.4}", se);
        println!(
            "95% confidence     : +/- {:.4}",
            result.confidence_95().unwrap_or(0.0)
        );
    }
    if let Some(ratio) = result.call_ratio {
        println!("call-exercise ratio: {:.4}", ratio);
    }
    if let Some(policy) = result.policy {
        println!("decision rule      : {}", policy.name());
    }
    println!("vanilla call (T2)  : {:.4}", call);
    println!("vanilla put  (T2)  : {:.4}", put);
    println!("straddle     (T2)  : {:.4}", call + put);

    Ok(())
}
