//! Partial layer-by-layer solver.
//!
//! Only the first stage (the white cross) does anything, and even that is a
//! heuristic: it moves white edges up from the yellow face without checking
//! that they arrive correctly oriented, and it never verifies the result. The
//! remaining stages are recorded as unimplemented so that callers can tell
//! that the cube may not be solved afterward.

use strum::{Display, EnumIter};

use crate::cube::Ring;
use crate::{Cube, FaceColor, Sign, TurnFace, Twist};

/// Grid positions of the white face's edges, in the order they are checked.
/// Each one borders the corresponding face in [`CROSS_FACES`].
const WHITE_EDGES: [(Sign, Sign); 4] = [
    (Sign::Zero, Sign::Neg),
    (Sign::Neg, Sign::Zero),
    (Sign::Zero, Sign::Pos),
    (Sign::Pos, Sign::Zero),
];
/// Lateral faces visited by the cross stage, along with the twist that
/// brings an edge up from the yellow face into each one.
const CROSS_FACES: [(FaceColor, TurnFace); 4] = [
    (FaceColor::Green, TurnFace::B),
    (FaceColor::Orange, TurnFace::L),
    (FaceColor::Blue, TurnFace::F),
    (FaceColor::Red, TurnFace::R),
];
/// Grid position on a lateral face that must match the face color for a
/// cross edge to count as placed.
const TOP_CENTER: (Sign, Sign) = (Sign::Zero, Sign::Pos);
/// Edge index on a lateral face that names where a yellow-face edge belongs.
const GOAL_EDGE: usize = 1;

/// Named stage of a layer-by-layer solve.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolveStage {
    /// First-layer edges.
    Cross,
    /// First two layers.
    F2L,
    /// Orientation of the last layer.
    OLL,
    /// Permutation of the last layer.
    PLL,
}
impl SolveStage {
    /// All stages, in the order they run.
    pub const ALL: [SolveStage; 4] = [
        SolveStage::Cross,
        SolveStage::F2L,
        SolveStage::OLL,
        SolveStage::PLL,
    ];
}

/// Result of running one solve stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage ran. Its result is not verified.
    Attempted {
        /// Number of twists applied.
        twists: usize,
        /// Number of edges that could not be aligned and were skipped.
        stalled_edges: usize,
    },
    /// The stage has no algorithm and did nothing.
    Unimplemented,
}

/// Summary of a call to [`solve()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Every twist applied, in order.
    pub twists: Vec<Twist>,
    /// Outcome of each stage, in [`SolveStage::ALL`] order.
    pub stages: [(SolveStage, StageOutcome); 4],
}
impl SolveReport {
    /// Returns the outcome of a stage.
    pub fn outcome(&self, stage: SolveStage) -> StageOutcome {
        self.stages[stage as usize].1
    }
    /// Returns the stages that did nothing because they have no algorithm.
    pub fn unimplemented_stages(&self) -> impl Iterator<Item = SolveStage> + '_ {
        self.stages
            .iter()
            .filter(|(_, outcome)| *outcome == StageOutcome::Unimplemented)
            .map(|(stage, _)| *stage)
    }
    /// Returns the total number of edges skipped across all stages.
    pub fn stalled_edges(&self) -> usize {
        self.stages
            .iter()
            .map(|(_, outcome)| match outcome {
                StageOutcome::Attempted { stalled_edges, .. } => *stalled_edges,
                StageOutcome::Unimplemented => 0,
            })
            .sum()
    }
}

/// Runs every stage in order on `cube`.
pub fn solve(cube: &mut Cube) -> SolveReport {
    let mut twists = vec![];
    let stages = SolveStage::ALL.map(|stage| (stage, run_stage(stage, cube, &mut twists)));
    if !cube.is_solved() {
        log::info!("cube is not solved after {} twists", twists.len());
    }
    SolveReport { twists, stages }
}

/// Runs a single stage on `cube`, appending the twists it applies to
/// `twists`.
pub fn run_stage(stage: SolveStage, cube: &mut Cube, twists: &mut Vec<Twist>) -> StageOutcome {
    let outcome = match stage {
        SolveStage::Cross => solve_cross(cube, twists),
        SolveStage::F2L | SolveStage::OLL | SolveStage::PLL => {
            log::warn!("solve stage {stage} is not implemented");
            StageOutcome::Unimplemented
        }
    };
    if let StageOutcome::Attempted {
        twists,
        stalled_edges,
    } = outcome
    {
        log::info!("solve stage {stage}: {twists} twists, {stalled_edges} stalled edges");
    }
    outcome
}

fn apply(cube: &mut Cube, twists: &mut Vec<Twist>, twist: Twist) {
    cube.twist(twist);
    twists.push(twist);
}

fn solve_cross(cube: &mut Cube, twists: &mut Vec<Twist>) -> StageOutcome {
    let start = twists.len();
    let mut stalled_edges = 0;
    let y_ring = Ring::Y.faces();

    for ((row, col), (side, double_turn)) in WHITE_EDGES.into_iter().zip(CROSS_FACES) {
        let white_edge = cube.face(FaceColor::White).facelet(row, col).label();
        if white_edge == FaceColor::White {
            // Edges that are white but misoriented are left alone.
            let top_center = cube.face(side).facelet(TOP_CENTER.0, TOP_CENTER.1);
            if top_center.label() != side {
                log::debug!("cross edge for {side} is white but misoriented");
            }
            continue;
        }

        // The yellow face is re-read after every insertion.
        for j in 0..4 {
            if cube.face(FaceColor::Yellow).edge(j).label() != FaceColor::White {
                continue;
            }
            let goal = cube.face(y_ring[j]).edge(GOAL_EDGE).label();
            let Some(offset) = (0..4).position(|n| y_ring[(j + n) % 4] == goal) else {
                log::warn!("cannot align yellow edge {j} with {goal} face; skipping it");
                stalled_edges += 1;
                continue;
            };
            for _ in 0..offset {
                apply(cube, twists, Twist::cw(TurnFace::D));
            }
            apply(cube, twists, Twist::cw(double_turn));
            apply(cube, twists, Twist::cw(double_turn));
        }
    }

    StageOutcome::Attempted {
        twists: twists.len() - start,
        stalled_edges,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_twists;

    #[test]
    fn test_solved_cube_is_untouched() {
        let mut cube = Cube::new();
        let report = solve(&mut cube);
        assert!(cube.is_solved());
        assert!(report.twists.is_empty());
        assert_eq!(
            report.outcome(SolveStage::Cross),
            StageOutcome::Attempted {
                twists: 0,
                stalled_edges: 0,
            },
        );
        assert_eq!(
            report.unimplemented_stages().collect::<Vec<_>>(),
            vec![SolveStage::F2L, SolveStage::OLL, SolveStage::PLL],
        );
        assert_eq!(report.stalled_edges(), 0);
    }

    #[test]
    fn test_unimplemented_stages_do_nothing() {
        let mut cube = Cube::new();
        cube.rotate("R");
        let before = cube.clone();
        let mut twists = vec![];
        for stage in [SolveStage::F2L, SolveStage::OLL, SolveStage::PLL] {
            assert_eq!(run_stage(stage, &mut cube, &mut twists), StageOutcome::Unimplemented);
        }
        assert_eq!(cube, before);
        assert!(twists.is_empty());
    }

    #[test]
    fn test_cross_inserts_edge_from_yellow_face() {
        let mut cube = Cube::new();
        cube.twist_all(
            parse_twists("R R R R D' L' L' F L B B' D R F' F B' L L U' B'").unwrap(),
        );
        let report = solve(&mut cube);
        assert_eq!(report.twists, parse_twists("B B").unwrap());
        assert_eq!(
            report.outcome(SolveStage::Cross),
            StageOutcome::Attempted {
                twists: 2,
                stalled_edges: 0,
            },
        );
        assert_eq!(report.stalled_edges(), 0);
    }

    #[test]
    fn test_cross_aligns_yellow_face_first() {
        let mut cube = Cube::new();
        cube.twist_all(parse_twists("U B2").unwrap());
        let report = solve(&mut cube);
        // One D twist brings the edge under its face before the double turn.
        assert_eq!(report.twists, parse_twists("D B B").unwrap());
        assert_eq!(report.stalled_edges(), 0);
        assert_eq!(cube.label_counts(), [9; 6]);
    }

    #[test]
    fn test_cross_skips_edges_that_cannot_be_aligned() {
        let mut cube = Cube::new();
        cube.twist_all(
            parse_twists("B F' D' D U' F' L' R R' R L' F L' D F F B B' B U").unwrap(),
        );
        let report = solve(&mut cube);
        assert_eq!(report.twists, parse_twists("D D D B B").unwrap());
        assert_eq!(
            report.outcome(SolveStage::Cross),
            StageOutcome::Attempted {
                twists: 5,
                stalled_edges: 3,
            },
        );
        assert_eq!(report.stalled_edges(), 3);
        assert_eq!(cube.label_counts(), [9; 6]);
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_stage_order() {
        use strum::IntoEnumIterator;

        assert_eq!(SolveStage::iter().collect::<Vec<_>>(), SolveStage::ALL);
        for (i, stage) in SolveStage::ALL.into_iter().enumerate() {
            assert_eq!(stage as usize, i);
        }
    }
}
