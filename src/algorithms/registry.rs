//! Static catalog of algorithm descriptors
//!
//! Read-only metadata keyed by [`AlgorithmId`]: display name, category, and
//! asymptotic complexity.  The mapping is a compile-time `match` over the
//! closed identifier set — no mutation after process start, no dynamic
//! dispatch.

use super::AlgorithmId;

/// Whether an algorithm sorts or searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
        }
    }
}

/// Asymptotic complexity of one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Immutable metadata for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub category: Category,
    pub complexity: Complexity,
}

/// Look up the descriptor for a known algorithm
pub fn descriptor(id: AlgorithmId) -> &'static Descriptor {
    match id {
        AlgorithmId::BubbleSort => &Descriptor {
            name: "Bubble Sort",
            category: Category::Sorting,
            complexity: Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
            },
        },
        AlgorithmId::SelectionSort => &Descriptor {
            name: "Selection Sort",
            category: Category::Sorting,
            complexity: Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
            },
        },
        AlgorithmId::InsertionSort => &Descriptor {
            name: "Insertion Sort",
            category: Category::Sorting,
            complexity: Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
            },
        },
        AlgorithmId::MergeSort => &Descriptor {
            name: "Merge Sort",
            category: Category::Sorting,
            complexity: Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
            },
        },
        AlgorithmId::QuickSort => &Descriptor {
            name: "Quick Sort",
            category: Category::Sorting,
            complexity: Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
            },
        },
        AlgorithmId::LinearSearch => &Descriptor {
            name: "Linear Search",
            category: Category::Searching,
            complexity: Complexity {
                best: "O(1)",
                average: "O(n)",
                worst: "O(n)",
            },
        },
        AlgorithmId::BinarySearch => &Descriptor {
            name: "Binary Search",
            category: Category::Searching,
            complexity: Complexity {
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
            },
        },
    }
}

/// Resolve a string identifier to its algorithm and descriptor, or None
pub fn lookup(key: &str) -> Option<(AlgorithmId, &'static Descriptor)> {
    AlgorithmId::from_key(key).map(|id| (id, descriptor(id)))
}

/// The full catalog in identifier order
pub fn catalog() -> impl Iterator<Item = (AlgorithmId, &'static Descriptor)> {
    AlgorithmId::ALL.iter().map(|id| (*id, descriptor(*id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_every_catalog_key() {
        for (id, desc) in catalog() {
            let (found, found_desc) = lookup(id.key()).expect("catalog key must resolve");
            assert_eq!(found, id);
            assert_eq!(found_desc.name, desc.name);
        }
    }

    #[test]
    fn lookup_rejects_unknown_keys() {
        assert!(lookup("heap-sort").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn categories_match_identifier_kind() {
        for (id, desc) in catalog() {
            let searching = desc.category == Category::Searching;
            assert_eq!(searching, id.is_searching());
        }
    }

    #[test]
    fn catalog_is_identifier_ordered() {
        let keys: Vec<&str> = catalog().map(|(id, _)| id.key()).collect();
        assert_eq!(
            keys,
            vec![
                "bubble-sort",
                "selection-sort",
                "insertion-sort",
                "merge-sort",
                "quick-sort",
                "linear-search",
                "binary-search",
            ]
        );
    }
}
