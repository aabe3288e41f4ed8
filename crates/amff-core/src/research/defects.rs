use serde::Serialize;

/// One class of the NEU steel surface defect dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefectType {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub accuracy: &'static str,
}

impl DefectType {
    /// Accuracy as a number of percent, e.g. `99.8` for `"99.8%"`.
    pub fn accuracy_percent(&self) -> Option<f64> {
        self.accuracy.trim_end_matches('%').trim().parse().ok()
    }
}

pub const DEFECT_TYPES: [DefectType; 6] = [
    DefectType {
        icon: "🔹",
        name: "Crazing",
        description: "Fine surface cracks in steel coating",
        accuracy: "99.8%",
    },
    DefectType {
        icon: "🔸",
        name: "Inclusion",
        description: "Foreign material embedded in steel",
        accuracy: "99.4%",
    },
    DefectType {
        icon: "🔶",
        name: "Patches",
        description: "Irregular surface texture patches",
        accuracy: "99.6%",
    },
    DefectType {
        icon: "🔴",
        name: "Pitted Surface",
        description: "Small holes and cavities",
        accuracy: "99.2%",
    },
    DefectType {
        icon: "🔵",
        name: "Rolled-in Scale",
        description: "Oxide scale pressed into surface",
        accuracy: "99.7%",
    },
    DefectType {
        icon: "⚡",
        name: "Scratches",
        description: "Linear mechanical damage",
        accuracy: "99.9%",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::INFERENCE_SERIES;

    #[test]
    fn test_defect_table() {
        assert_eq!(DEFECT_TYPES.len(), 6);
        for defect in &DEFECT_TYPES {
            assert!(!defect.name.is_empty());
            let accuracy = defect.accuracy_percent().unwrap();
            assert!((99.0..=100.0).contains(&accuracy), "{}", defect.name);
        }
    }

    #[test]
    fn test_matches_inference_chart() {
        for (defect, (label, value)) in DEFECT_TYPES.iter().zip(INFERENCE_SERIES.points) {
            assert_eq!(defect.name, *label);
            assert_eq!(defect.accuracy_percent(), Some(*value));
        }
    }

    #[test]
    fn test_accuracy_percent_rejects_garbage() {
        let defect = DefectType {
            accuracy: "n/a",
            ..DEFECT_TYPES[0]
        };
        assert_eq!(defect.accuracy_percent(), None);
    }
}
