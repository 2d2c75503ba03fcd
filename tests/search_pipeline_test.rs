mod common;

use common::*;
use media_catalog_admin::models::{CastMemberKind, Category};
use media_catalog_admin::search::{SearchParams, SearchRequest, SortDirection};
use media_catalog_admin::state::{
    create_cast_member_repository, create_category_repository, create_genre_repository,
    create_video_repository, CastMemberFilter, GenreFilter, Repository, SearchableRepository,
    VideoFilter,
};
use serde_json::json;

fn names(items: &[Category]) -> Vec<&str> {
    items.iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
async fn pagination_defaults_over_sixteen_records() {
    let repo = create_category_repository();
    let categories: Vec<Category> = (0..16)
        .map(|i| category_at(&format!("category {i:02}"), ts(i)))
        .collect();
    repo.bulk_insert(categories).await.unwrap();

    let page1 = repo.search(&SearchParams::new()).await.unwrap();
    assert_eq!(page1.items().len(), 15);
    assert_eq!(page1.total(), 16);
    assert_eq!(page1.per_page(), 15);
    assert_eq!(page1.last_page(), 2);

    let page2 = repo
        .search(&SearchParams::new().with_page(2))
        .await
        .unwrap();
    assert_eq!(page2.items().len(), 1);
    assert_eq!(page2.current_page(), 2);
}

#[tokio::test]
async fn sort_direction_symmetry() {
    let repo = create_category_repository();
    let categories = ["b", "a", "d", "e", "c"]
        .iter()
        .enumerate()
        .map(|(i, name)| category_at(name, ts(i as i64)))
        .collect();
    repo.bulk_insert(categories).await.unwrap();

    let asc = repo
        .search(&SearchParams::new().with_sort("name", SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(names(asc.items()), ["a", "b", "c", "d", "e"]);

    let desc = repo
        .search(&SearchParams::new().with_sort("name", SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(names(desc.items()), ["e", "d", "c", "b", "a"]);
}

#[tokio::test]
async fn filter_is_case_insensitive() {
    let repo = create_category_repository();
    // identical timestamps so the newest-first fallback keeps insertion order
    let categories = ["test", "TEST", "TeSt", "a"]
        .iter()
        .map(|name| category_at(name, ts(0)))
        .collect();
    repo.bulk_insert(categories).await.unwrap();

    let params = SearchParams::new().with_filter("test".to_string());
    let result = repo.search(&params).await.unwrap();

    assert_eq!(names(result.items()), ["test", "TEST", "TeSt"]);
    assert_eq!(result.total(), 3);
}

#[tokio::test]
async fn combined_filter_sort_paginate() {
    let repo = create_category_repository();
    let categories = ["test", "a", "TEST", "e", "TeSt"]
        .iter()
        .enumerate()
        .map(|(i, name)| category_at(name, ts(i as i64)))
        .collect();
    repo.bulk_insert(categories).await.unwrap();

    let request = SearchRequest::new()
        .with_filter(json!("test"))
        .with_sort(json!("name"))
        .with_sort_direction(json!("asc"))
        .with_per_page(json!(2));
    let params: SearchParams<String> = SearchParams::from_request(&request);

    let page1 = repo.search(&params).await.unwrap();
    assert_eq!(names(page1.items()), ["TEST", "TeSt"]);
    assert_eq!(page1.total(), 3);
    assert_eq!(page1.last_page(), 2);

    let page2 = repo.search(&params.with_page(2)).await.unwrap();
    assert_eq!(names(page2.items()), ["test"]);
    assert_eq!(page2.total(), 3);
}

#[tokio::test]
async fn out_of_range_page_is_empty_not_an_error() {
    let repo = create_category_repository();
    repo.bulk_insert(vec![category("a"), category("b")])
        .await
        .unwrap();

    let params: SearchParams<String> = SearchParams::from_request(
        &SearchRequest::new()
            .with_page(json!(9))
            .with_filter(json!("a")),
    );
    let result = repo.search(&params).await.unwrap();

    assert!(result.is_empty());
    assert_eq!(result.total(), 1);
    assert_eq!(result.last_page(), 1);
    assert_eq!(result.current_page(), 9);
}

#[tokio::test]
async fn default_sort_is_newest_first() {
    let repo = create_category_repository();
    repo.bulk_insert(vec![
        category_at("oldest", ts(0)),
        category_at("middle", ts(10)),
        category_at("newest", ts(20)),
    ])
    .await
    .unwrap();

    let result = repo.search(&SearchParams::new()).await.unwrap();
    assert_eq!(names(result.items()), ["newest", "middle", "oldest"]);

    // an unknown sort field falls back to the same default
    let params = SearchParams::new().with_sort("priority", SortDirection::Asc);
    let result = repo.search(&params).await.unwrap();
    assert_eq!(names(result.items()), ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn cast_member_filter_by_name_and_kind() {
    let repo = create_cast_member_repository();
    repo.bulk_insert(vec![
        cast_member("Mary Doe", CastMemberKind::Director),
        cast_member("John Doe", CastMemberKind::Actor),
        cast_member("Jane Roe", CastMemberKind::Actor),
    ])
    .await
    .unwrap();

    let request = SearchRequest::new().with_filter(json!({"name": "doe", "kind": "actor"}));
    let params: SearchParams<CastMemberFilter> = SearchParams::from_request(&request);

    let result = repo.search(&params).await.unwrap();
    assert_eq!(result.total(), 1);
    assert_eq!(result.items()[0].name, "John Doe");
}

#[tokio::test]
async fn genre_filter_by_category_membership() {
    let repo = create_genre_repository();
    let movies = category("Movies");
    let series = category("Series");

    repo.bulk_insert(vec![
        genre("Drama", vec![movies.id, series.id]),
        genre("Sitcom", vec![series.id]),
        genre("Noir", vec![movies.id]),
    ])
    .await
    .unwrap();

    let request =
        SearchRequest::new().with_filter(json!({"category_ids": [movies.id.to_string()]}));
    let params: SearchParams<GenreFilter> = SearchParams::from_request(&request);

    let result = repo.search(&params).await.unwrap();
    let found: Vec<&str> = result.items().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(result.total(), 2);
    assert!(found.contains(&"Drama"));
    assert!(found.contains(&"Noir"));

    // name AND category must both hold
    let request = SearchRequest::new()
        .with_filter(json!({"name": "sit", "category_ids": [movies.id.to_string()]}));
    let params: SearchParams<GenreFilter> = SearchParams::from_request(&request);
    let result = repo.search(&params).await.unwrap();
    assert_eq!(result.total(), 0);
}

#[tokio::test]
async fn video_filter_by_title_and_relations() {
    let repo = create_video_repository();
    let members = vec![
        cast_member("Mary Doe", CastMemberKind::Director),
        cast_member("John Doe", CastMemberKind::Actor),
    ];
    let starring = pick_random(&members);

    let mut fiction = video("Pulp Fiction");
    fiction.add_cast_member(starring.id);
    let other = video("Fiction Workshop");

    repo.bulk_insert(vec![fiction.clone(), other]).await.unwrap();

    let request = SearchRequest::new().with_filter(json!({
        "title": "fiction",
        "cast_member_ids": [starring.id.to_string()],
    }));
    let params: SearchParams<VideoFilter> = SearchParams::from_request(&request);

    let result = repo.search(&params).await.unwrap();
    assert_eq!(result.total(), 1);
    assert_eq!(result.items()[0].id, fiction.id);
}

#[tokio::test]
async fn malformed_request_still_searches_safely() {
    let repo = create_category_repository();
    repo.bulk_insert((0..3).map(|i| category_at(&format!("c{i}"), ts(i))).collect())
        .await
        .unwrap();

    let request = SearchRequest::new()
        .with_page(json!("not-a-page"))
        .with_per_page(json!(-2))
        .with_sort(json!(""))
        .with_sort_direction(json!("sideways"))
        .with_filter(json!(null));
    let params: SearchParams<String> = SearchParams::from_request(&request);

    let result = repo.search(&params).await.unwrap();
    assert_eq!(result.current_page(), 1);
    assert_eq!(result.per_page(), 15);
    assert_eq!(result.total(), 3);
    // no filter, no explicit sort: newest first
    assert_eq!(names(result.items()), ["c2", "c1", "c0"]);
}
