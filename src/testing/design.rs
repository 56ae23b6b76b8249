use crate::core::Sample;
use crate::testing::models::{linear_model, normal_sample};

/// Generates a pick-freeze input design of `(p + 2) * m` rows of `p`-dim
/// standard-normal points: `m` rows of A, `m` rows of B, then for each input
/// `i` the block `E_i` (A with column `i` taken from B).
pub fn pick_freeze_input_design(p: usize, m: usize, seed: u64) -> Sample {
    let a = normal_sample(p, m, seed);
    let b = normal_sample(p, m, seed.wrapping_add(1));

    let mut design = Sample::new(p).unwrap();
    for row in a.rows() {
        design.push_row(row).unwrap();
    }
    for row in b.rows() {
        design.push_row(row).unwrap();
    }
    for i in 0..p {
        for k in 0..m {
            let mut row = a.row(k).to_vec();
            row[i] = b.row(k)[i];
            design.push_row(&row).unwrap();
        }
    }
    design
}

/// Maps every row of `input` through `model`, producing the output design.
pub fn evaluate<F>(input: &Sample, output_dimension: usize, model: F) -> Sample
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let mut output = Sample::new(output_dimension).unwrap();
    for row in input.rows() {
        output.push_row(&model(row)).unwrap();
    }
    output
}

/// Single-output pick-freeze design of the linear model, ready to feed to an
/// accumulator.
pub fn linear_output_design(coefficients: &[f64], m: usize, seed: u64) -> Sample {
    let input = pick_freeze_input_design(coefficients.len(), m, seed);
    evaluate(&input, 1, |x| vec![linear_model(coefficients, x)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_has_pick_freeze_layout() {
        let p = 3;
        let m = 5;
        let design = pick_freeze_input_design(p, m, 9);
        assert_eq!(design.len(), (p + 2) * m);
        assert_eq!(design.dimension(), p);

        for i in 0..p {
            for k in 0..m {
                let a = design.row(k);
                let b = design.row(m + k);
                let e = design.row((2 + i) * m + k);
                for c in 0..p {
                    if c == i {
                        assert_eq!(e[c], b[c]);
                    } else {
                        assert_eq!(e[c], a[c]);
                    }
                }
            }
        }
    }

    #[test]
    fn evaluate_keeps_row_order() {
        let input = Sample::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let output = evaluate(&input, 2, |x| vec![x[0] + x[1], x[0] * x[1]]);
        assert_eq!(output.row(0), &[3.0, 2.0]);
        assert_eq!(output.row(1), &[7.0, 12.0]);
    }
}
