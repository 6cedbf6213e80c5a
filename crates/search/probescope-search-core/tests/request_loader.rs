use probescope_search_core::{parse_search_request_json, Algorithm, RequestError};

#[test]
fn parses_full_request() {
    let req = parse_search_request_json(
        r#"{ "values": [0, 2, 4, 6], "target": 4, "algorithm": "linear" }"#,
    )
    .expect("valid request");
    assert_eq!(req.values, vec![0, 2, 4, 6]);
    assert_eq!(req.target, 4);
    assert_eq!(req.algorithm, Algorithm::Linear);
}

#[test]
fn algorithm_defaults_to_binary() {
    let req = parse_search_request_json(r#"{ "values": [1, 2, 3], "target": 2 }"#).unwrap();
    assert_eq!(req.algorithm, Algorithm::Binary);
}

#[test]
fn accepts_jump_tag() {
    let req = parse_search_request_json(
        r#"{ "values": [1, 2, 3], "target": 2, "algorithm": "jump" }"#,
    )
    .unwrap();
    assert_eq!(req.algorithm, Algorithm::Jump);
}

#[test]
fn rejects_unknown_algorithm_tag() {
    let err = parse_search_request_json(
        r#"{ "values": [1], "target": 1, "algorithm": "bogo" }"#,
    )
    .unwrap_err();
    match err {
        RequestError::UnknownAlgorithm(tag) => assert_eq!(tag, "bogo"),
        other => panic!("expected UnknownAlgorithm, got {other}"),
    }
}

#[test]
fn rejects_malformed_json() {
    let err = parse_search_request_json("{ not json").unwrap_err();
    assert!(matches!(err, RequestError::Parse(_)));
}
