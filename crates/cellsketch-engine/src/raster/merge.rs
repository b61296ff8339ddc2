//! Glyph merge rules.
//!
//! When two rasterized contributions land on the same cell, the result depends
//! only on the classes of the glyph already there (`existing`) and the glyph
//! arriving (`incoming`). Contributions arrive in a fixed order (lines, then
//! boxes, each in insertion order), so the outcome is deterministic.

use super::glyph::{GlyphClass, Junction};

/// Resolves `incoming` landing on a cell that already holds `existing`.
///
/// Rules, in precedence order:
/// 1. identical glyphs are unchanged
/// 2. corner under a non-corner: an edge joins it into a tee, anything else
///    leaves the corner
/// 3. non-corner under a corner: an edge joins into a tee, a junction becomes
///    `┼`, anything else takes the corner
/// 4. corner under a corner: the incoming corner
/// 5. orthogonal edges cross into `┼`
/// 6. junction and edge: `┼` if the edge supplies the missing arm, otherwise
///    the junction
/// 7. two different junctions: `┼`
/// 8. anything else: the incoming glyph
pub fn merge_glyph(existing: char, incoming: char) -> char {
    if existing == incoming {
        return incoming;
    }
    merge_class(GlyphClass::of(existing), GlyphClass::of(incoming)).to_char()
}

/// Class-level form of [`merge_glyph`].
pub fn merge_class(existing: GlyphClass, incoming: GlyphClass) -> GlyphClass {
    use GlyphClass::{Corner, Edge, Junction as J};

    if existing == incoming {
        return incoming;
    }

    match (existing, incoming) {
        (Corner(_), Corner(_)) => incoming,
        (Corner(c), Edge(o)) => J(c.join(o)),
        (Corner(_), _) => existing,

        (Edge(o), Corner(c)) => J(c.join(o)),
        (J(_), Corner(_)) => J(Junction::Cross),
        (_, Corner(_)) => incoming,

        (Edge(_), Edge(_)) => J(Junction::Cross),

        (J(j), Edge(o)) | (Edge(o), J(j)) => {
            if j.completed_by(o) {
                J(Junction::Cross)
            } else {
                J(j)
            }
        }

        (J(_), J(_)) => J(Junction::Cross),

        _ => incoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::glyph::{BLOCK, CROSS, DIAGONAL_FALLING, HORIZONTAL, VERTICAL};

    const CORNERS: [char; 4] = ['┌', '┐', '└', '┘'];
    const EDGES: [char; 2] = [HORIZONTAL, VERTICAL];
    const JUNCTIONS: [char; 5] = ['├', '┤', '┬', '┴', '┼'];
    const OTHERS: [char; 3] = [BLOCK, DIAGONAL_FALLING, 'x'];

    fn all() -> impl Iterator<Item = char> {
        CORNERS.into_iter().chain(EDGES).chain(JUNCTIONS).chain(OTHERS)
    }

    // ── rule 1: identity ──────────────────────────────────────────────────

    #[test]
    fn identical_glyphs_are_unchanged() {
        for ch in all() {
            assert_eq!(merge_glyph(ch, ch), ch);
        }
    }

    // ── rule 2: existing corner ───────────────────────────────────────────

    #[test]
    fn corner_then_edge_forms_tee() {
        assert_eq!(merge_glyph('┌', VERTICAL), '├');
        assert_eq!(merge_glyph('┌', HORIZONTAL), '┬');
        assert_eq!(merge_glyph('┐', VERTICAL), '┤');
        assert_eq!(merge_glyph('┐', HORIZONTAL), '┬');
        assert_eq!(merge_glyph('└', VERTICAL), '├');
        assert_eq!(merge_glyph('└', HORIZONTAL), '┴');
        assert_eq!(merge_glyph('┘', VERTICAL), '┤');
        assert_eq!(merge_glyph('┘', HORIZONTAL), '┴');
    }

    #[test]
    fn corner_keeps_itself_against_junction_or_other() {
        for corner in CORNERS {
            for incoming in JUNCTIONS.into_iter().chain(OTHERS) {
                assert_eq!(merge_glyph(corner, incoming), corner, "{corner} <- {incoming}");
            }
        }
    }

    // ── rule 3: incoming corner ───────────────────────────────────────────

    #[test]
    fn edge_then_corner_forms_tee() {
        assert_eq!(merge_glyph(VERTICAL, '┌'), '├');
        assert_eq!(merge_glyph(HORIZONTAL, '┌'), '┬');
        assert_eq!(merge_glyph(VERTICAL, '┐'), '┤');
        assert_eq!(merge_glyph(HORIZONTAL, '┐'), '┬');
        assert_eq!(merge_glyph(VERTICAL, '└'), '├');
        assert_eq!(merge_glyph(HORIZONTAL, '└'), '┴');
        assert_eq!(merge_glyph(VERTICAL, '┘'), '┤');
        assert_eq!(merge_glyph(HORIZONTAL, '┘'), '┴');
    }

    #[test]
    fn junction_then_corner_collapses_to_cross() {
        for junction in JUNCTIONS {
            for corner in CORNERS {
                assert_eq!(merge_glyph(junction, corner), CROSS);
            }
        }
    }

    #[test]
    fn other_then_corner_takes_corner() {
        for other in OTHERS {
            for corner in CORNERS {
                assert_eq!(merge_glyph(other, corner), corner);
            }
        }
    }

    // ── rule 4: corner vs corner ──────────────────────────────────────────

    #[test]
    fn later_corner_wins() {
        for a in CORNERS {
            for b in CORNERS {
                assert_eq!(merge_glyph(a, b), b);
            }
        }
    }

    // ── rule 5: edges ─────────────────────────────────────────────────────

    #[test]
    fn orthogonal_edges_cross() {
        assert_eq!(merge_glyph(HORIZONTAL, VERTICAL), CROSS);
        assert_eq!(merge_glyph(VERTICAL, HORIZONTAL), CROSS);
    }

    // ── rule 6: junction vs edge ──────────────────────────────────────────

    #[test]
    fn edge_completing_a_tee_promotes_to_cross() {
        assert_eq!(merge_glyph('├', HORIZONTAL), CROSS);
        assert_eq!(merge_glyph('┤', HORIZONTAL), CROSS);
        assert_eq!(merge_glyph('┬', VERTICAL), CROSS);
        assert_eq!(merge_glyph('┴', VERTICAL), CROSS);
        assert_eq!(merge_glyph(HORIZONTAL, '├'), CROSS);
        assert_eq!(merge_glyph(HORIZONTAL, '┤'), CROSS);
        assert_eq!(merge_glyph(VERTICAL, '┬'), CROSS);
        assert_eq!(merge_glyph(VERTICAL, '┴'), CROSS);
    }

    #[test]
    fn cross_absorbs_edges_in_either_order() {
        for edge in EDGES {
            assert_eq!(merge_glyph(CROSS, edge), CROSS);
            assert_eq!(merge_glyph(edge, CROSS), CROSS);
        }
    }

    #[test]
    fn non_completing_edge_keeps_the_junction() {
        assert_eq!(merge_glyph('├', VERTICAL), '├');
        assert_eq!(merge_glyph('┬', HORIZONTAL), '┬');
        assert_eq!(merge_glyph(VERTICAL, '├'), '├');
        assert_eq!(merge_glyph(HORIZONTAL, '┴'), '┴');
    }

    // ── rule 7: junction vs junction ──────────────────────────────────────

    #[test]
    fn different_junctions_cross() {
        for a in JUNCTIONS {
            for b in JUNCTIONS {
                if a != b {
                    assert_eq!(merge_glyph(a, b), CROSS, "{a} <- {b}");
                }
            }
        }
    }

    // ── rule 8: everything else ───────────────────────────────────────────

    #[test]
    fn other_pairs_take_incoming() {
        for existing in EDGES.into_iter().chain(JUNCTIONS).chain(OTHERS) {
            for incoming in OTHERS {
                if existing != incoming {
                    assert_eq!(merge_glyph(existing, incoming), incoming);
                }
            }
        }
        for existing in OTHERS {
            for incoming in EDGES.into_iter().chain(JUNCTIONS) {
                assert_eq!(merge_glyph(existing, incoming), incoming);
            }
        }
    }

    #[test]
    fn result_is_defined_for_every_pair() {
        // Every pair resolves to either input or a member of the junction set.
        for a in all() {
            for b in all() {
                let m = merge_glyph(a, b);
                assert!(m == a || m == b || JUNCTIONS.contains(&m), "{a} <- {b} = {m}");
            }
        }
    }
}
