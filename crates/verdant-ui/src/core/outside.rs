//! Decision logic for dismissing overlays on pointer interaction elsewhere.

/// Decide whether an interaction happened outside every owned element.
///
/// Each item reports whether an owned element contains the event target, or
/// `None` when the element could not be resolved. Any unresolved element
/// skips the check entirely, as does an empty owned set.
#[must_use]
pub fn is_outside_interaction<I>(owned: I) -> bool
where
    I: IntoIterator<Item = Option<bool>>,
{
    let mut checked = false;
    for contains in owned {
        match contains {
            None | Some(true) => return false,
            Some(false) => checked = true,
        }
    }
    checked
}

#[cfg(test)]
mod tests {
    use super::is_outside_interaction;

    #[test]
    fn fires_when_no_owned_element_contains_target() {
        assert!(is_outside_interaction([Some(false), Some(false)]));
    }

    #[test]
    fn inside_any_owned_element_suppresses() {
        assert!(!is_outside_interaction([Some(false), Some(true)]));
        assert!(!is_outside_interaction([Some(true)]));
    }

    #[test]
    fn unresolved_element_skips_the_check() {
        assert!(!is_outside_interaction([Some(false), None]));
        assert!(!is_outside_interaction([None, Some(false)]));
    }

    #[test]
    fn empty_owned_set_never_fires() {
        assert!(!is_outside_interaction(std::iter::empty()));
    }
}
