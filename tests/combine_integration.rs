//! Integration tests for combining resources

use proptest::prelude::*;
use remote_resource::resource::pointfree::ap;
use remote_resource::{assert_failure, assert_success};
use remote_resource::{combine, combine_all, Resource};

type R = Resource<i32, String>;

fn fail(e: &str) -> R {
    Resource::failure(e.to_string())
}

#[test]
fn two_successes() {
    assert_eq!(combine!(R::success(1), R::success(2)), Resource::Success((1, 2)));
}

#[test]
fn loading_before_success() {
    assert_eq!(combine!(R::loading(), R::success(2)), Resource::Loading);
}

#[test]
fn failure_after_success() {
    assert_eq!(
        combine!(R::success(1), fail("e")),
        Resource::Failure("e".to_string())
    );
}

#[test]
fn failure_before_loading() {
    assert_eq!(
        combine!(fail("a"), R::loading()),
        Resource::Failure("a".to_string())
    );
}

#[test]
fn heterogeneous_success_types() {
    #[derive(Debug, PartialEq)]
    struct Profile {
        name: String,
        followers: u32,
        verified: bool,
    }

    let name: Resource<String, String> = Resource::success("ada".to_string());
    let followers: Resource<u32, String> = Resource::success(1_200);
    let verified: Resource<bool, String> = Resource::success(true);

    let profile = combine((name, followers, verified)).map(|(name, followers, verified)| Profile {
        name,
        followers,
        verified,
    });

    assert_success!(
        profile,
        Profile {
            name: "ada".to_string(),
            followers: 1_200,
            verified: true,
        }
    );
}

#[test]
fn error_payload_is_preserved_verbatim() {
    #[derive(Debug, Clone, PartialEq)]
    enum ApiError {
        NotFound { id: u32 },
        Unauthorized,
    }

    let a: Resource<u8, ApiError> = Resource::success(1);
    let b: Resource<u8, ApiError> = Resource::failure(ApiError::NotFound { id: 7 });
    let c: Resource<u8, ApiError> = Resource::failure(ApiError::Unauthorized);

    assert_failure!(combine!(a, b, c), ApiError::NotFound { id: 7 });
}

#[test]
fn tuple_and_vec_forms_agree() {
    let inputs = [R::success(1), R::initial(), fail("x"), R::success(4)];
    let from_tuple = combine((
        inputs[0].clone(),
        inputs[1].clone(),
        inputs[2].clone(),
        inputs[3].clone(),
    ))
    .map(|(a, b, c, d)| vec![a, b, c, d]);
    assert_eq!(from_tuple, combine_all(inputs));
}

#[test]
fn combine_is_built_from_ap_and_map() {
    // pairing by hand with ap, checking each input in turn, matches combine
    let pair = |a: R, b: R| -> Resource<(i32, i32), String> {
        if !a.is_success() {
            return a.map(|_| unreachable!());
        }
        ap(a.map(|x| move |y| (x, y)))(b)
    };

    let cases = [R::initial(), R::loading(), fail("e"), R::success(3)];
    for a in &cases {
        for b in &cases {
            assert_eq!(pair(a.clone(), b.clone()), combine((a.clone(), b.clone())));
        }
    }
}

fn any_resource() -> impl Strategy<Value = R> {
    prop_oneof![
        Just(Resource::Initial),
        Just(Resource::Loading),
        "[a-z]{1,4}".prop_map(Resource::Failure),
        any::<i32>().prop_map(Resource::Success),
    ]
}

proptest! {
    #[test]
    fn leftmost_non_success_decides(rs in prop::collection::vec(any_resource(), 0..12)) {
        let combined = combine_all(rs.clone());
        match rs.iter().find(|r| !r.is_success()) {
            Some(first) => prop_assert_eq!(combined.tag(), first.tag()),
            None => {
                let values: Vec<i32> = rs.into_iter().map(Resource::unpack_value).collect();
                prop_assert_eq!(combined, Resource::Success(values));
            }
        }
    }

    #[test]
    fn leftmost_non_success_is_returned_unchanged(rs in prop::collection::vec(any_resource(), 1..12)) {
        let combined = combine_all(rs.clone());
        if let Some(first) = rs.into_iter().find(|r| !r.is_success()) {
            let expected: Resource<Vec<i32>, String> = first.map(|_| Vec::new());
            prop_assert_eq!(combined, expected);
        }
    }

    #[test]
    fn success_length_matches_input(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let rs = values.iter().copied().map(R::success);
        prop_assert_eq!(combine_all(rs), Resource::Success(values));
    }
}
