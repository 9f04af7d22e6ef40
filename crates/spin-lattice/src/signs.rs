use spin_core::{SpinError, DOWN_CHAR, SPIN_DOWN, SPIN_UP, UP_CHAR};

/// Maps `'+'` to an up spin and `'-'` to a down spin, skipping anything else.
pub fn parse(signs: &str) -> Vec<u8> {
    signs
        .chars()
        .filter_map(|ch| match ch {
            UP_CHAR => Some(SPIN_UP),
            DOWN_CHAR => Some(SPIN_DOWN),
            _ => None,
        })
        .collect()
}

/// Renders encoded spins as a sign string.
pub fn render(spins: &[u8]) -> Result<String, SpinError> {
    spins
        .iter()
        .enumerate()
        .map(|(position, &value)| match value {
            SPIN_UP => Ok(UP_CHAR),
            SPIN_DOWN => Ok(DOWN_CHAR),
            other => Err(SpinError::invalid_element(position, other)),
        })
        .collect()
}
