use super::*;
use crate::catalog::Song;
use crate::error::SonglabError;

#[test]
fn test_mismatched_label_count_rejected() {
    let table = SongTable::from_songs(vec![
        Song::new("a", vec![0.0]),
        Song::new("b", vec![1.0]),
    ])
    .unwrap();
    let model = ClusterModel::new(vec![vec![0.0]], vec![0]).unwrap();

    let err = Assets::new(table, model).unwrap_err();
    assert!(matches!(
        err,
        SonglabError::LabelCountMismatch { labels: 1, rows: 2 }
    ));
}

#[test]
fn test_mismatched_dimension_rejected() {
    let table = SongTable::from_songs(vec![Song::new("a", vec![0.0, 1.0])]).unwrap();
    let model = ClusterModel::new(vec![vec![0.0]], vec![0]).unwrap();

    let err = Assets::new(table, model).unwrap_err();
    assert!(matches!(
        err,
        SonglabError::DimensionMismatch { expected: 1, found: 2 }
    ));
}

#[test]
fn test_recommender_takes_config() {
    let table = SongTable::from_songs(vec![Song::new("a", vec![0.0])]).unwrap();
    let model = ClusterModel::new(vec![vec![0.0]], vec![0]).unwrap();
    let assets = Assets::new(table, model).unwrap();

    let config = Config {
        top_k: 3,
        inference: crate::recommender::InferenceMode::Predict,
        ..Config::default()
    };
    let recommender = assets.recommender(&config);
    assert_eq!(recommender.top_k(), 3);
    assert_eq!(recommender.mode(), crate::recommender::InferenceMode::Predict);
}

#[test]
fn test_load_missing_files_fails() {
    let config = Config {
        model_path: "no/such/model.json".into(),
        table_path: "no/such/table.csv".into(),
        ..Config::default()
    };
    let err = Assets::load(&config).unwrap_err();
    assert!(matches!(err, SonglabError::Io { .. }));
}
