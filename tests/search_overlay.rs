mod common;

use common::make_app;
use okestore::catalog::{CatalogSource, StaticCatalog};
use okestore::ui::mvi::Reducer;
use okestore::ui::search::{filter_products, DismissReason, SearchIntent, SearchReducer, SearchState};
use okestore::wishlist::{InMemoryWishlist, Wishlist};

fn names(query: &str) -> Vec<String> {
    let products = StaticCatalog::demo().products();
    filter_products(query, &products)
        .into_iter()
        .map(|p| p.name.clone())
        .collect()
}

fn open_with(query: &str) -> SearchState {
    let mut state = SearchReducer::reduce(SearchState::Hidden, SearchIntent::Open);
    for ch in query.chars() {
        state = SearchReducer::reduce(state, SearchIntent::Insert(ch));
    }
    let revision = state.revision();
    SearchReducer::reduce(state, SearchIntent::Commit { revision })
}

#[test]
fn empty_and_whitespace_queries_show_nothing() {
    assert!(names("").is_empty());
    assert!(names("   ").is_empty());
    assert!(names("\t").is_empty());
}

#[test]
fn shoe_matches_name_and_description_in_catalog_order() {
    assert_eq!(names("shoe"), vec!["Red Shoes", "Blue Shoes", "Wool Scarf"]);
    assert_eq!(names("SHOE"), names("shoe"));
}

#[test]
fn category_query_matches_its_product() {
    let products = StaticCatalog::demo().products();
    let category = products[0].category.to_lowercase();
    let results = filter_products(&category, &products);
    assert!(results.iter().all(|p| {
        p.category.to_lowercase().contains(&category)
            || p.name.to_lowercase().contains(&category)
            || p.description.to_lowercase().contains(&category)
    }));
    assert!(results.iter().any(|p| p.id == products[0].id));
}

#[test]
fn favorite_toggle_keeps_results() {
    let products = StaticCatalog::demo().products();
    let wishlist = InMemoryWishlist::new();
    let state = open_with("shoe");
    let before: Vec<_> = state.results(&products).iter().map(|p| p.id.clone()).collect();

    let first = state.results(&products)[0].id.clone();
    assert!(wishlist.toggle_favorite(&first));

    let after: Vec<_> = state.results(&products).iter().map(|p| p.id.clone()).collect();
    assert_eq!(before, after);
    assert!(wishlist.is_favorited(&first));
    assert!(!wishlist.is_favorited(&before[1]));
}

#[test]
fn stale_commit_is_ignored() {
    let mut state = SearchReducer::reduce(SearchState::Hidden, SearchIntent::Open);
    state = SearchReducer::reduce(state, SearchIntent::Insert('m'));
    let stale = state.revision();
    state = SearchReducer::reduce(state, SearchIntent::Insert('u'));

    let state = SearchReducer::reduce(state, SearchIntent::Commit { revision: stale });
    assert!(state.is_pending());

    let revision = state.revision();
    let state = SearchReducer::reduce(state, SearchIntent::Commit { revision });
    assert!(!state.is_pending());
}

#[test]
fn every_dismissal_is_idempotent() {
    for reason in [
        DismissReason::CloseButton,
        DismissReason::Escape,
        DismissReason::OutsidePointer,
    ] {
        let once = SearchReducer::reduce(open_with("mug"), SearchIntent::Dismiss(reason));
        let twice = SearchReducer::reduce(once.clone(), SearchIntent::Dismiss(reason));
        assert_eq!(once, SearchState::Hidden);
        assert_eq!(twice, SearchState::Hidden);
    }
}

#[test]
fn pointer_inside_keeps_overlay() {
    let state = open_with("mug");
    let state = SearchReducer::reduce(state.clone(), SearchIntent::PointerDown { inside: true });
    assert!(state.is_visible());
    assert_eq!(state.input(), "mug");
}

#[test]
fn app_outside_press_closes_overlay() {
    let mut app = make_app();
    app.open_search();
    app.search_insert('m');

    let area = app.search_area();
    app.pointer_down(area.x + 1, area.y + 1);
    assert!(app.search().is_visible());

    app.pointer_down(0, 0);
    assert!(!app.search().is_visible());
    app.pointer_down(0, 0);
    assert!(!app.search().is_visible());
}
