//! Static navigation table for the launcher shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub location: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Play",
        location: "/",
    },
    NavItem {
        label: "Installations",
        location: "/install",
    },
    NavItem {
        label: "Settings",
        location: "/settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_locations_are_unique() {
        let mut locations: Vec<&str> = NAV_ITEMS.iter().map(|item| item.location).collect();
        locations.sort_unstable();
        locations.dedup();
        assert_eq!(locations.len(), NAV_ITEMS.len());
    }
}
