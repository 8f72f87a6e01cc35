//! Instrument definitions and exercise logic.

mod chooser;

pub use chooser::{chooser_payoff, decide, DecisionPolicy, OptionType};
