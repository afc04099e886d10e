use indexmap::IndexMap;
use inductor_sentence::Sentence;

use crate::formula::TradingFormula;

/// "For each sentence, the quantity of tokens to buy as a function of credences" — the
/// policy a trader emits for a single update.
pub type TradingPolicy = IndexMap<Sentence, TradingFormula>;
