use strum_macros::{Display, EnumIter, EnumString};

/// The operators of the quest domain, in the order successors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum OperatorName {
    Up,
    Down,
    Left,
    Right,
    Kill,
    Pickup,
}
