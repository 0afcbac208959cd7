//! Per-facility precision, recall and F1 from predicted vs. true labels.

use crate::error::EvaluateError;

/// Classification scores of predicted facility labels against ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScores {
    precision: Vec<f64>,
    recall: Vec<f64>,
    f1: Vec<f64>,
    macro_f1: f64,
    accuracy: f64,
}

impl ClassScores {
    /// Precision per facility.
    pub fn precision(&self) -> &[f64] {
        &self.precision
    }

    /// Recall per facility.
    pub fn recall(&self) -> &[f64] {
        &self.recall
    }

    /// F1 per facility.
    pub fn f1(&self) -> &[f64] {
        &self.f1
    }

    /// Unweighted mean of the per-facility F1 scores.
    pub fn macro_f1(&self) -> f64 {
        self.macro_f1
    }

    /// Fraction of points whose prediction equals the ground truth.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

/// `num / den`, or 0 when the denominator is 0.
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

/// Scores `predicted` against `truth` for facilities `0..n_classes`.
///
/// For each facility `h`: TP counts points with both labels `h`, FP points
/// predicted `h` with another true label, FN points truly `h` predicted
/// otherwise. Precision, recall and F1 are 0 whenever their denominator is 0,
/// so a facility that serves nobody scores 0 rather than being skipped.
///
/// # Errors
///
/// Returns [`EvaluateError`] if the vectors are empty or differ in length,
/// there are no classes, or a label is `>= n_classes`.
pub fn score_predictions(
    truth: &[usize],
    predicted: &[usize],
    n_classes: usize,
) -> Result<ClassScores, EvaluateError> {
    if truth.len() != predicted.len() {
        return Err(EvaluateError::LengthMismatch {
            truth: truth.len(),
            predicted: predicted.len(),
        });
    }
    if truth.is_empty() {
        return Err(EvaluateError::EmptyDemand);
    }
    if n_classes == 0 {
        return Err(EvaluateError::NoFacilities);
    }
    if let Some(&label) = truth.iter().chain(predicted).find(|&&l| l >= n_classes) {
        return Err(EvaluateError::LabelOutOfRange { label, n_classes });
    }

    let mut tp = vec![0usize; n_classes];
    let mut fp = vec![0usize; n_classes];
    let mut fn_ = vec![0usize; n_classes];
    let mut correct = 0usize;
    for (&t, &p) in truth.iter().zip(predicted) {
        if t == p {
            tp[t] += 1;
            correct += 1;
        } else {
            fp[p] += 1;
            fn_[t] += 1;
        }
    }

    let mut precision = Vec::with_capacity(n_classes);
    let mut recall = Vec::with_capacity(n_classes);
    let mut f1 = Vec::with_capacity(n_classes);
    for h in 0..n_classes {
        let tp_h = tp[h] as f64;
        let p = ratio(tp_h, tp_h + fp[h] as f64);
        let r = ratio(tp_h, tp_h + fn_[h] as f64);
        precision.push(p);
        recall.push(r);
        f1.push(ratio(2.0 * p * r, p + r));
    }

    let macro_f1 = siting_stats::mean(&f1);
    let accuracy = correct as f64 / truth.len() as f64;

    Ok(ClassScores {
        precision,
        recall,
        f1,
        macro_f1,
        accuracy,
    })
}
