/// Mean of a non-empty set of equal-length vectors
pub fn compute_centroid(vectors: &[&[f32]]) -> Option<Vec<f32>> {
    let dim = vectors.first()?.len();
    let mut out = vec![0.0; dim];

    for v in vectors {
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }

    let n = vectors.len() as f32;
    for x in out.iter_mut() {
        *x /= n;
    }

    Some(out)
}
