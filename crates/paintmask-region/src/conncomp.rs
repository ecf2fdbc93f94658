//! Connected component analysis
//!
//! Labels connected groups of set pixels in a binary mask using a
//! two-pass union-find scan, then summarizes each component with its
//! pixel count and bounding rectangle.
//!
//! The output label order is part of this module's contract: labels are
//! renumbered densely (1..K) in raster first-appearance order during the
//! resolution pass, so the result does not depend on union-find
//! internals and is identical across runs for identical input.

use paintmask_core::{BitMask, LabelMap, Rect};

/// Connectivity for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// A connected component in a labeled mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Dense label in raster first-appearance order, starting at 1
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding rectangle of this component
    pub bounds: Rect,
}

impl Component {
    /// Whether the component has at least one pixel on the outer edge of
    /// a `width` x `height` canvas.
    ///
    /// Equivalent to scanning the component's pixels: a bounding edge on
    /// the canvas edge implies a pixel in that row or column, and vice
    /// versa.
    pub fn touches_canvas_edge(&self, width: u32, height: u32) -> bool {
        self.bounds.x == 0
            || self.bounds.y == 0
            || self.bounds.max_x() == width - 1
            || self.bounds.max_y() == height - 1
    }
}

/// Disjoint-set forest over provisional labels.
///
/// Label 0 is a dummy so that provisional labels can index directly.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Allocate a new singleton set and return its label.
    fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Find the set root with path halving.
    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    /// Merge two sets, keeping the lower root.
    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[high as usize] = low;
        }
    }
}

/// Label connected components of the set pixels in a binary mask.
///
/// Returns a label map of the same shape: clear pixels stay 0, set
/// pixels get a dense component label 1..K in raster first-appearance
/// order.
///
/// # Arguments
///
/// * `mask` - input binary mask; its set pixels are the plane to label
/// * `connectivity` - neighbor relation ([`Connectivity`])
pub fn label_components(mask: &BitMask, connectivity: Connectivity) -> LabelMap {
    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let bits = mask.values();

    let mut map = LabelMap::new(mask.width(), mask.height())
        .expect("mask dimensions are already validated");
    let mut uf = UnionFind::new();

    // First pass: provisional labels, merging with the already-visited
    // neighbors (W and N; NW and NE as well for 8-way).
    {
        let labels = map.values_mut();
        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                if !bits[idx] {
                    continue;
                }

                let mut neighbors = [0u32; 4];
                let mut n = 0;
                if x > 0 && bits[idx - 1] {
                    neighbors[n] = labels[idx - 1];
                    n += 1;
                }
                if y > 0 {
                    let up = idx - w;
                    if bits[up] {
                        neighbors[n] = labels[up];
                        n += 1;
                    }
                    if connectivity == Connectivity::EightWay {
                        if x > 0 && bits[up - 1] {
                            neighbors[n] = labels[up - 1];
                            n += 1;
                        }
                        if x + 1 < w && bits[up + 1] {
                            neighbors[n] = labels[up + 1];
                            n += 1;
                        }
                    }
                }

                if n == 0 {
                    labels[idx] = uf.make_set();
                } else {
                    let first = neighbors[0];
                    for &other in &neighbors[1..n] {
                        uf.union(first, other);
                    }
                    labels[idx] = first;
                }
            }
        }
    }

    // Second pass: resolve roots and renumber densely in raster
    // first-appearance order.
    let mut dense = vec![0u32; uf.parent.len()];
    let mut next = 0u32;
    for label in map.values_mut() {
        if *label == 0 {
            continue;
        }
        let root = uf.find(*label);
        if dense[root as usize] == 0 {
            next += 1;
            dense[root as usize] = next;
        }
        *label = dense[root as usize];
    }

    map
}

/// Summarize each component of a label map.
///
/// One pass over the grid accumulating pixel count and bounds per label.
/// The result is ordered by ascending label; labels absent from the map
/// are skipped.
pub fn component_stats(labels: &LabelMap) -> Vec<Component> {
    struct Acc {
        count: u32,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    }

    let w = labels.width() as usize;
    let mut accs: Vec<Option<Acc>> = Vec::new();

    for (idx, &label) in labels.values().iter().enumerate() {
        if label == 0 {
            continue;
        }
        let x = (idx % w) as u32;
        let y = (idx / w) as u32;
        let slot = (label - 1) as usize;
        if slot >= accs.len() {
            accs.resize_with(slot + 1, || None);
        }
        match &mut accs[slot] {
            Some(acc) => {
                acc.count += 1;
                acc.min_x = acc.min_x.min(x);
                acc.min_y = acc.min_y.min(y);
                acc.max_x = acc.max_x.max(x);
                acc.max_y = acc.max_y.max(y);
            }
            empty @ None => {
                *empty = Some(Acc {
                    count: 1,
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                });
            }
        }
    }

    accs.into_iter()
        .enumerate()
        .filter_map(|(slot, acc)| {
            acc.map(|acc| Component {
                label: slot as u32 + 1,
                pixel_count: acc.count,
                bounds: Rect::from_corners(acc.min_x, acc.min_y, acc.max_x, acc.max_y),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&str]) -> BitMask {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let mut mask = BitMask::new(w, h).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    mask.set(x as u32, y as u32, true).unwrap();
                }
            }
        }
        mask
    }

    #[test]
    fn empty_mask_has_no_components() {
        let mask = BitMask::new(4, 4).unwrap();
        let labels = label_components(&mask, Connectivity::EightWay);
        assert_eq!(labels.max_label(), 0);
        assert!(component_stats(&labels).is_empty());
    }

    #[test]
    fn separate_blobs_get_separate_labels() {
        let mask = mask_from_rows(&[
            "##..",
            "##..",
            "....",
            "..##",
        ]);
        let labels = label_components(&mask, Connectivity::EightWay);
        let comps = component_stats(&labels);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].pixel_count, 4);
        assert_eq!(comps[1].pixel_count, 2);
        // Raster first-appearance order: the top-left blob is label 1.
        assert_eq!(labels.get(0, 0), Some(1));
        assert_eq!(labels.get(2, 3), Some(2));
    }

    #[test]
    fn diagonal_contact_joins_only_under_eight_way() {
        let mask = mask_from_rows(&[
            "#.",
            ".#",
        ]);
        let labels8 = label_components(&mask, Connectivity::EightWay);
        assert_eq!(component_stats(&labels8).len(), 1);

        let labels4 = label_components(&mask, Connectivity::FourWay);
        assert_eq!(component_stats(&labels4).len(), 2);
    }

    #[test]
    fn u_shape_merges_into_one_component() {
        // The two arms meet only at the bottom; the left arm's provisional
        // label must survive union with the right arm's.
        let mask = mask_from_rows(&[
            "#.#",
            "#.#",
            "###",
        ]);
        let labels = label_components(&mask, Connectivity::FourWay);
        let comps = component_stats(&labels);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].pixel_count, 7);
        assert_eq!(comps[0].bounds, Rect::from_corners(0, 0, 2, 2));
    }

    #[test]
    fn labeling_is_deterministic() {
        let mask = mask_from_rows(&[
            "#.#.#",
            "#####",
            ".....",
            "##.##",
        ]);
        let a = label_components(&mask, Connectivity::EightWay);
        let b = label_components(&mask, Connectivity::EightWay);
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn border_contact_is_derived_from_bounds() {
        let mask = mask_from_rows(&[
            ".....",
            ".##..",
            ".....",
        ]);
        let labels = label_components(&mask, Connectivity::EightWay);
        let comps = component_stats(&labels);
        assert_eq!(comps.len(), 1);
        assert!(!comps[0].touches_canvas_edge(5, 3));
        // The same bounds on a tighter canvas would touch.
        assert!(comps[0].touches_canvas_edge(3, 3));
    }
}
