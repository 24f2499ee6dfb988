use super::*;
use crate::catalog::{Song, SongTable};
use crate::error::SonglabError;

fn two_cluster_model() -> ClusterModel {
    ClusterModel::new(vec![vec![0.0, 0.0], vec![10.0, 10.0]], vec![0, 0, 1, 1]).unwrap()
}

fn four_song_table() -> SongTable {
    SongTable::from_songs(vec![
        Song::new("a", vec![-1.0, 0.0]),
        Song::new("b", vec![1.0, 0.0]),
        Song::new("c", vec![10.0, 9.0]),
        Song::new("d", vec![10.0, 11.0]),
    ])
    .unwrap()
}

#[test]
fn test_euclidean_distance() {
    assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    assert_eq!(squared_euclidean(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    assert_eq!(norm(&[3.0, 4.0]), 5.0);
}

#[test]
fn test_predict_nearest_centroid() {
    let model = two_cluster_model();
    let labels = model
        .predict(&[vec![0.5, 0.2], vec![9.0, 12.0], vec![-3.0, 1.0]])
        .unwrap();
    assert_eq!(labels, vec![0, 1, 0]);
}

#[test]
fn test_predict_tie_goes_to_lowest_label() {
    let model = two_cluster_model();
    assert_eq!(model.predict_one(&[5.0, 5.0]).unwrap(), 0);
}

#[test]
fn test_predict_dimension_mismatch() {
    let model = two_cluster_model();
    let err = model.predict_one(&[1.0]).unwrap_err();
    assert!(matches!(
        err,
        SonglabError::DimensionMismatch { expected: 2, found: 1 }
    ));
}

#[test]
fn test_empty_model_rejected() {
    let err = ClusterModel::new(vec![], vec![]).unwrap_err();
    assert!(matches!(err, SonglabError::EmptyModel));
}

#[test]
fn test_label_out_of_range_rejected() {
    let err = ClusterModel::new(vec![vec![0.0]], vec![0, 1]).unwrap_err();
    assert!(matches!(
        err,
        SonglabError::LabelOutOfRange { label: 1, n_clusters: 1 }
    ));
}

#[test]
fn test_json_with_sklearn_attribute_names() {
    let json = r#"{"cluster_centers_": [[0.0, 1.0], [2.0, 3.0]], "labels_": [1, 0, 1]}"#;
    let model = ClusterModel::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(model.n_clusters(), 2);
    assert_eq!(model.dim(), 2);
    assert_eq!(model.labels(), &[1, 0, 1]);
    assert_eq!(model.centroid(1), Some(&[2.0, 3.0][..]));
    assert_eq!(model.centroid(2), None);
}

#[test]
fn test_malformed_json() {
    let err = ClusterModel::from_json_reader("{not json".as_bytes()).unwrap_err();
    assert!(matches!(err, SonglabError::Json(_)));
}

#[test]
fn test_validate_against_table() {
    let model = two_cluster_model();
    assert!(model.validate_against(&four_song_table()).is_ok());

    let short = SongTable::from_songs(vec![Song::new("a", vec![0.0, 0.0])]).unwrap();
    let err = model.validate_against(&short).unwrap_err();
    assert!(matches!(
        err,
        SonglabError::LabelCountMismatch { labels: 4, rows: 1 }
    ));
}

#[test]
fn test_clusters_group_rows() {
    let model = two_cluster_model();
    let table = four_song_table();
    let clusters = model.clusters();

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].song_rows, vec![0, 1]);
    assert_eq!(clusters[1].song_rows, vec![2, 3]);
    assert_eq!(clusters[1].size(), 2);

    assert_eq!(clusters[0].member_mean(&table), Some(vec![0.0, 0.0]));
    assert_eq!(clusters[1].drift(&table), Some(0.0));
}
