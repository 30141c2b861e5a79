use learnHub::app::routes::{section_name, NAV_ENTRIES};
use learnHub::Route;

#[test]
fn every_nav_entry_resolves_to_itself() {
    for (i, (_, path)) in NAV_ENTRIES.iter().enumerate() {
        let r = Route::resolve(path);
        assert_eq!(r.path(), *path);
        assert_eq!(r.nav_index(), i);
    }
}

#[test]
fn wildcard_redirects_home() {
    assert_eq!(Route::resolve("/nowhere/at/all"), Route::Home);
    assert_eq!(Route::resolve("/components/"), Route::Components);
}

#[test]
fn nav_wraps_both_ways() {
    assert_eq!(Route::Home.prev(), Route::Placeholder("http".into()));
    assert_eq!(Route::Placeholder("http".into()).next(), Route::Home);
    assert_eq!(section_name("services"), "Services");
}
