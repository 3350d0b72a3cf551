use serde::Serialize;
use std::fmt;

/// Faction colour of a node. Every node starts out `None`, and the colouring
/// procedure assigns `Red` or `Black`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Colour {
    #[default]
    None,
    Red,
    Black,
}

impl Colour {
    /// The colour an enemy must have. `None` has no opposite.
    pub fn opposite(self) -> Self {
        match self {
            Colour::Red => Colour::Black,
            Colour::Black => Colour::Red,
            Colour::None => Colour::None,
        }
    }

    pub fn is_set(self) -> bool {
        self != Colour::None
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Colour::None => "none",
            Colour::Red => "red",
            Colour::Black => "black",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uncoloured() {
        assert_eq!(Colour::default(), Colour::None);
        assert!(!Colour::default().is_set());
    }

    #[test]
    fn opposite_alternates() {
        assert_eq!(Colour::Red.opposite(), Colour::Black);
        assert_eq!(Colour::Black.opposite(), Colour::Red);
        assert_eq!(Colour::None.opposite(), Colour::None);
    }
}
