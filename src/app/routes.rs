use std::fmt;

/// Screens reachable through the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Components,
    Lifecycle,
    DataBinding,
    /// Not-yet-written section; carries the path segment it was reached by.
    Placeholder(String),
}

/// Navigation bar entries, in display order: (label, path).
pub const NAV_ENTRIES: [(&str, &str); 8] = [
    ("Home", ""),
    ("Components", "components"),
    ("Lifecycle", "components/lifecycle"),
    ("Data Binding", "data-binding"),
    ("Directives", "directives"),
    ("Services", "services"),
    ("Forms", "forms"),
    ("HTTP", "http"),
];

const PLACEHOLDER_SECTIONS: [&str; 4] = ["directives", "services", "forms", "http"];

impl Route {
    /// Resolve a path against the route table. Unknown paths redirect home.
    pub fn resolve(path: &str) -> Route {
        let p = path.trim().trim_matches('/');
        match p {
            "" => Route::Home,
            "components" => Route::Components,
            "components/lifecycle" => Route::Lifecycle,
            "data-binding" => Route::DataBinding,
            s if PLACEHOLDER_SECTIONS.contains(&s) => Route::Placeholder(s.to_string()),
            other => {
                tracing::debug!("no route for `{}`, redirecting home", other);
                Route::Home
            }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "",
            Route::Components => "components",
            Route::Lifecycle => "components/lifecycle",
            Route::DataBinding => "data-binding",
            Route::Placeholder(s) => s,
        }
    }

    /// Index into [`NAV_ENTRIES`].
    pub fn nav_index(&self) -> usize {
        NAV_ENTRIES
            .iter()
            .position(|(_, p)| *p == self.path())
            .unwrap_or(0)
    }

    pub fn from_nav_index(i: usize) -> Route {
        let (_, path) = NAV_ENTRIES[i % NAV_ENTRIES.len()];
        Route::resolve(path)
    }

    pub fn next(&self) -> Route {
        Route::from_nav_index(self.nav_index() + 1)
    }

    pub fn prev(&self) -> Route {
        let n = NAV_ENTRIES.len();
        Route::from_nav_index(self.nav_index() + n - 1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Title for a placeholder section: `data-binding` → `Data Binding`.
pub fn section_name(path: &str) -> String {
    let first = path.split('/').next().unwrap_or("");
    first
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/components/"), Route::Components);
        assert_eq!(Route::resolve("components/lifecycle"), Route::Lifecycle);
        assert_eq!(Route::resolve("data-binding"), Route::DataBinding);
        assert_eq!(Route::resolve("forms"), Route::Placeholder("forms".into()));
    }

    #[test]
    fn wildcard_redirects_home() {
        assert_eq!(Route::resolve("nope"), Route::Home);
        assert_eq!(Route::resolve("components/unknown"), Route::Home);
    }

    #[test]
    fn nav_cycles_both_ways() {
        assert_eq!(Route::Home.next(), Route::Components);
        assert_eq!(Route::Home.prev(), Route::Placeholder("http".into()));
        assert_eq!(Route::Placeholder("http".into()).next(), Route::Home);
        for (i, _) in NAV_ENTRIES.iter().enumerate() {
            assert_eq!(Route::from_nav_index(i).nav_index(), i);
        }
    }

    #[test]
    fn section_names() {
        assert_eq!(section_name("data-binding"), "Data Binding");
        assert_eq!(section_name("http"), "Http");
        assert_eq!(section_name(""), "");
    }
}
