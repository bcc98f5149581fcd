//! All-pairs minimal-pair search.
use std::ops::Range;
use std::path::Path;

use crate::classifier::{Classifier, Contrast};
use crate::error::Result;
use crate::filter::FilterPairs;
use crate::word::{Word, WordPair};
use crate::Config;

/// Number of comparisons `generate` performs for `n` words.
pub fn comparison_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Runs the classifier over every unordered pair of a word list.
///
/// Pairs come out in `(i, j)` order with `i < j`, `i` ascending first.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    classifier: Classifier,
}

impl Generator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            classifier: Classifier::new(cfg),
        }
    }

    pub fn from_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn set_filter_pairs(&mut self, filter: FilterPairs) {
        self.classifier.set_filter_pairs(filter);
    }

    /// Replace the filter with pairs loaded from `path`.
    ///
    /// On error the current filter is kept.
    pub fn set_filter_pairs_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        match FilterPairs::from_file(path.as_ref()) {
            Ok(filter) => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    pairs = filter.len(),
                    "loaded filter pairs"
                );
                self.set_filter_pairs(filter);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "keeping previous filter pairs");
                Err(e)
            }
        }
    }

    pub fn generate(&self, words: &[Word]) -> Vec<WordPair> {
        self.generate_with_progress(words, |_| {})
    }

    /// Like `generate`, calling `progress` with the number of completed
    /// comparisons after each row.
    pub fn generate_with_progress<F: FnMut(usize)>(
        &self,
        words: &[Word],
        progress: F,
    ) -> Vec<WordPair> {
        self.search(words, 0..words.len(), progress)
    }

    /// Pairs whose first index lies in `rows`.
    ///
    /// Concatenating the results for consecutive ranges covering
    /// `0..words.len()` gives the same output as `generate`.
    pub fn generate_rows(&self, words: &[Word], rows: Range<usize>) -> Vec<WordPair> {
        self.search(words, rows, |_| {})
    }

    fn search<F: FnMut(usize)>(
        &self,
        words: &[Word],
        rows: Range<usize>,
        mut progress: F,
    ) -> Vec<WordPair> {
        if !self.classifier.keeps_any() {
            tracing::warn!("every contrast kind is disabled, no minimal pairs will be generated");
            return Vec::new();
        }

        let rows = rows.start.min(words.len())..rows.end.min(words.len());
        let mut out = Vec::new();
        let mut done = 0usize;
        let mut counts = [0usize; 3];

        for i in rows {
            for j in (i + 1)..words.len() {
                let contrast = self.classifier.classify(&words[i], &words[j]);
                let slot = match contrast {
                    Contrast::None => continue,
                    Contrast::Phoneme => 0,
                    Contrast::Chroneme => 1,
                    Contrast::Stress => 2,
                };
                counts[slot] += 1;
                out.push(WordPair::new(words[i].clone(), words[j].clone(), contrast));
            }
            done += words.len() - i - 1;
            progress(done);
        }

        tracing::info!(
            words = words.len(),
            comparisons = done,
            pairs = out.len(),
            phonemes = counts[0],
            chronemes = counts[1],
            stress = counts[2],
            "minimal pair search finished"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ipas: &[&str]) -> Vec<Word> {
        ipas.iter()
            .enumerate()
            .map(|(i, ipa)| Word::new(format!("w{i}"), ipa))
            .collect()
    }

    fn unfiltered() -> Generator {
        Generator::new(&Config {
            optimise: false,
            ..Config::default()
        })
    }

    #[test]
    fn comparison_count_is_triangular() {
        assert_eq!(comparison_count(0), 0);
        assert_eq!(comparison_count(1), 0);
        assert_eq!(comparison_count(4), 6);
    }

    #[test]
    fn pairs_in_index_order() {
        let list = words(&["/barˈbaz/", "/bamˈbaz/", "/bar:ˈbaz/", "/bar.baz/"]);
        let pairs = unfiltered().generate(&list);
        let found: Vec<(&str, &str, Contrast)> = pairs
            .iter()
            .map(|p| (p.first.text(), p.last.text(), p.contrast))
            .collect();
        assert_eq!(
            found,
            vec![
                ("w0", "w1", Contrast::Phoneme),
                ("w0", "w2", Contrast::Chroneme),
                ("w0", "w3", Contrast::Stress),
            ]
        );
    }

    #[test]
    fn progress_reports_completed_comparisons() {
        let list = words(&["/a/", "/e/", "/i/", "/o/"]);
        let mut seen = Vec::new();
        unfiltered().generate_with_progress(&list, |n| seen.push(n));
        assert_eq!(seen, vec![3, 5, 6, 6]);
    }

    #[test]
    fn rows_out_of_range_are_clamped() {
        let list = words(&["/a/", "/e/"]);
        assert_eq!(unfiltered().generate_rows(&list, 0..10).len(), 1);
        assert!(unfiltered().generate_rows(&list, 5..10).is_empty());
    }

    #[test]
    fn conflict_gives_empty_result() {
        let generator = Generator::new(&Config {
            keep_phonemes: false,
            keep_chronemes: false,
            keep_stress: false,
            ..Config::default()
        });
        assert!(generator.generate(&words(&["/bar/", "/bam/"])).is_empty());
    }
}
