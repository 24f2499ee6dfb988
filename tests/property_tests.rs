use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use songlab::recommender::{majority_label, rank_candidates, select_candidates};
use songlab::{ClusterModel, History, Outcome, Recommender, Song, SongTable};

const K: usize = 3;

/// Random table of `n` 2-d songs with labels in `0..K`
fn dataset() -> impl Strategy<Value = (Vec<Vec<f32>>, Vec<usize>)> {
    (1usize..30).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), n),
            prop::collection::vec(0..K, n),
        )
    })
}

fn build(points: Vec<Vec<f32>>, labels: Vec<usize>) -> (SongTable, ClusterModel) {
    let songs = points
        .into_iter()
        .enumerate()
        .map(|(i, p)| Song::new(format!("song{}", i), p))
        .collect();
    let table = SongTable::from_songs(songs).unwrap();
    let centers = (0..K).map(|c| vec![c as f32, -(c as f32)]).collect();
    let model = ClusterModel::new(centers, labels).unwrap();
    (table, model)
}

/// Reference mode: highest count, ties to the earliest first occurrence
fn reference_mode(labels: &[usize]) -> Option<usize> {
    let max = (0..K).map(|l| labels.iter().filter(|&&x| x == l).count()).max()?;
    if max == 0 {
        return None;
    }
    labels
        .iter()
        .copied()
        .find(|&l| labels.iter().filter(|&&x| x == l).count() == max)
}

proptest! {
    #[test]
    fn prop_majority_matches_reference(labels in prop::collection::vec(0..K, 0..40)) {
        prop_assert_eq!(majority_label(&labels), reference_mode(&labels));
    }

    #[test]
    fn prop_recommendation_never_in_history(
        (points, labels) in dataset(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..10),
        seed in any::<u64>(),
    ) {
        let n = points.len();
        let (table, model) = build(points, labels.clone());
        let history: History = picks.iter().map(|i| format!("song{}", i.index(n))).collect();

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = Recommender::new(&table, &model).recommend(&history, &mut rng).unwrap();

        // Favorite cluster is the mode of the history labels in table order
        let hist_labels: Vec<usize> = (0..n)
            .filter(|&row| history.contains(&format!("song{}", row)))
            .map(|row| labels[row])
            .collect();
        let favorite = reference_mode(&hist_labels).unwrap();

        match outcome {
            Outcome::Recommended(rec) => {
                prop_assert!(!history.contains(&rec.song));
                prop_assert_eq!(rec.cluster, favorite);

                let rows = select_candidates(favorite, &history, &table, &model);
                let ranked = rank_candidates(&rows, &table, model.centroid(favorite).unwrap());
                let top: Vec<&str> = ranked.iter().take(5).map(|c| c.song.as_str()).collect();
                prop_assert!(top.contains(&rec.song.as_str()));
                prop_assert_eq!(rec.shortlist.len(), rows.len().min(5));
            }
            Outcome::NoCandidates { cluster } => {
                prop_assert_eq!(cluster, favorite);
                prop_assert!(select_candidates(cluster, &history, &table, &model).is_empty());
            }
            Outcome::EmptyHistory => prop_assert!(false, "history is non-empty"),
        }
    }
}
