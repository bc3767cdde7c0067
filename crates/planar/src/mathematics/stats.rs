//! Extremal selection and aggregate statistics.
//!
//! All selections are a single left-to-right scan that replaces the current
//! best only on a strict improvement, so ties resolve to the first element.

use crate::describe::description;
use crate::figure::Figure;

/// First element for which no later element `replaces` it.
///
/// `replaces(candidate, best)` must be a strict comparison.
pub(crate) fn select_first<'a, T, F>(
    items: impl IntoIterator<Item = &'a T>,
    replaces: F,
) -> Option<&'a T>
where
    T: 'a,
    F: Fn(&T, &T) -> bool,
{
    let mut it = items.into_iter();
    let mut best = it.next()?;
    for item in it {
        if replaces(item, best) {
            best = item;
        }
    }
    Some(best)
}

/// Sum of `area()` over `figures`; `0.0` for an empty sequence.
pub fn total_area<'a>(figures: impl IntoIterator<Item = &'a Figure>) -> f64 {
    figures.into_iter().map(Figure::area).sum()
}

/// The four description statistics delivered by
/// [`Mathematics::find_figure_representations`](super::Mathematics::find_figure_representations).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Representations {
    /// Most characters.
    pub longest: String,
    /// Fewest characters.
    pub shortest: String,
    /// Lexicographically greatest.
    pub largest: String,
    /// Lexicographically least.
    pub smallest: String,
}

impl Representations {
    /// Reduce a list of descriptions. Empty input yields four empty strings.
    pub fn from_descriptions(descriptions: &[String]) -> Self {
        let pick = |replaces: fn(&String, &String) -> bool| {
            select_first(descriptions, replaces)
                .cloned()
                .unwrap_or_default()
        };
        Self {
            longest: pick(|c, b| c.chars().count() > b.chars().count()),
            shortest: pick(|c, b| c.chars().count() < b.chars().count()),
            largest: pick(|c, b| c > b),
            smallest: pick(|c, b| c < b),
        }
    }

    /// Describe every figure, then reduce.
    pub fn of_figures(figures: &[Figure]) -> Self {
        let descriptions: Vec<String> = figures.iter().map(description).collect();
        Self::from_descriptions(&descriptions)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn representations_serialize_by_field() {
        let r = Representations {
            longest: "Quadrilateral".into(),
            shortest: "Line".into(),
            largest: "Triangle".into(),
            smallest: "Line".into(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["longest"], "Quadrilateral");
        assert_eq!(json["smallest"], "Line");
        let back: Representations = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
