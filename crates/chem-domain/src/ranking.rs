/// Ranking denso descendente: la mayor puntuación recibe 1, los empates
/// comparten rango y el siguiente valor distinto recibe el entero siguiente.
/// Devuelve los rangos en el orden de entrada.
pub fn dense_ranks(scores: &[f64]) -> Vec<u32> {
    let mut distinct: Vec<f64> = scores.to_vec();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup_by(|a, b| a.total_cmp(b).is_eq());
    scores.iter()
          .map(|s| {
              // `distinct` está ordenado de mayor a menor
              let pos = distinct.partition_point(|d| d.total_cmp(s).is_gt());
              pos as u32 + 1
          })
          .collect()
}
