pub(crate) const ARROW: &[u8] = include_bytes!("../assets/icons/arrow.svg");
pub(crate) const ARROW_BACK: &[u8] =
    include_bytes!("../assets/icons/arrow_back.svg");
