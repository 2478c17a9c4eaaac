use crate::diff::DiffLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairMode {
    IntraLine,
    Block,
}

pub fn mode_for(removed: &[DiffLine], added: &[DiffLine]) -> PairMode {
    if removed.len() == 1 && added.len() == 1 {
        PairMode::IntraLine
    } else {
        PairMode::Block
    }
}
