//! Side-wall panel generation for the rendering collaborator.
//!
//! Collision never consults panels; they exist so the renderer can close
//! the vertical gap wherever a cell's floor drops to a neighboring cell.
//! The height-difference rule here is the same one the mover applies when
//! deciding step-up versus block.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::cell::VOID_FLOOR;
use crate::grid::GridMap;

/// A vertical quad closing the height gap along one cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPanel {
    /// Center of the quad in world space.
    pub center: Vec3,
    /// Horizontal extent, equal to the grid's cell size.
    pub width: f32,
    /// Lower edge height (the neighbor's floor, or the void sentinel).
    pub bottom: f32,
    /// Upper edge height (the owning cell's floor).
    pub top: f32,
    /// Unit direction from the owning cell toward the lower neighbor.
    pub normal: Vec2,
}

const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl GridMap {
    /// Panels for every non-wall cell edge whose orthogonal neighbor's
    /// floor is strictly lower (off-grid voids count as lower).
    pub fn wall_panels(&self) -> Vec<WallPanel> {
        let size = self.cell_size();
        let mut panels = Vec::new();

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let Some(cell) = self.cell(col, row).copied() else {
                    continue;
                };
                if cell.is_wall {
                    continue;
                }
                for (dc, dr) in NEIGHBORS {
                    let ncol = col as i64 + dc;
                    let nrow = row as i64 + dr;
                    let neighbor_floor = if ncol < 0 || nrow < 0 {
                        VOID_FLOOR
                    } else {
                        self.cell(ncol as usize, nrow as usize)
                            .map_or(VOID_FLOOR, |n| n.floor)
                    };
                    if neighbor_floor >= cell.floor {
                        continue;
                    }
                    let edge_x = (col as f32 + dc as f32 * 0.5) * size;
                    let edge_z = (row as f32 + dr as f32 * 0.5) * size;
                    panels.push(WallPanel {
                        center: Vec3::new(edge_x, (neighbor_floor + cell.floor) * 0.5, edge_z),
                        width: size,
                        bottom: neighbor_floor,
                        top: cell.floor,
                        normal: Vec2::new(dc as f32, dr as f32),
                    });
                }
            }
        }

        panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_edge_emits_one_panel() {
        // A step cell next to flat floor: only the step's edges drop.
        let grid = GridMap::parse(&[vec![0, 3]], 1.0).unwrap();
        let panels = grid.wall_panels();

        // The step cell (col 1) sees lower floor to its west and voids to
        // its north/south/east; the flat cell (col 0) sees voids on three
        // sides and a *higher* neighbor to the east (no panel there).
        let step_to_floor: Vec<_> = panels
            .iter()
            .filter(|p| p.bottom == 0.0 && p.top == 1.5)
            .collect();
        assert_eq!(step_to_floor.len(), 1);
        let panel = step_to_floor[0];
        assert_eq!(panel.center, Vec3::new(0.5, 0.75, 0.0));
        assert_eq!(panel.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn void_edges_drop_to_sentinel() {
        let grid = GridMap::parse(&[vec![0]], 1.0).unwrap();
        let panels = grid.wall_panels();
        assert_eq!(panels.len(), 4);
        for panel in &panels {
            assert_eq!(panel.bottom, VOID_FLOOR);
            assert_eq!(panel.top, 0.0);
        }
    }

    #[test]
    fn equal_floors_emit_nothing() {
        let grid = GridMap::parse(&[vec![1, 1, 1, 1], vec![1, 0, 0, 1], vec![1, 1, 1, 1]], 1.0)
            .unwrap();
        // Interior floor cells share height 0 with each other and with the
        // surrounding walls, so nothing drops.
        assert!(grid.wall_panels().is_empty());
    }

    #[test]
    fn pit_rim_panels_face_the_pit() {
        let grid = GridMap::parse(&[vec![1, 1, 1], vec![1, 5, 1], vec![1, 1, 1]], 1.0).unwrap();
        // Wall cells never emit; the pit cell itself is the lowest around.
        assert!(grid.wall_panels().is_empty());

        let grid = GridMap::parse(&[vec![0, 5]], 1.0).unwrap();
        let rim: Vec<_> = grid
            .wall_panels()
            .into_iter()
            .filter(|p| p.bottom == -2.0)
            .collect();
        assert_eq!(rim.len(), 1);
        assert_eq!(rim[0].top, 0.0);
        assert_eq!(rim[0].normal, Vec2::new(1.0, 0.0));
    }
}
