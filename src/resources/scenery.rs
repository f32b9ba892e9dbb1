use bevy::prelude::*;

/// Parallax depth of the cloud layer.
pub const CLOUD_DEPTH: f32 = 0.5;
/// Parallax depth of the building skyline.
pub const BUILDING_DEPTH: f32 = 0.8;
/// Parallax depth of everything standing on the ground.
pub const GROUND_DEPTH: f32 = 1.0;

/// Horizontal tolerance for the helicopter to count as above a pad.
const PAD_ALIGNMENT_TOLERANCE: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    pub x: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrassPatch {
    pub x: f32,
    /// Depth below the ground line.
    pub y_offset: f32,
    pub blade_heights: [f32; 5],
}

/// One window of a building facade, relative to the building's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowCell {
    pub x: f32,
    pub y: f32,
    pub lit: bool,
}

impl Building {
    pub const WINDOW_WIDTH: f32 = 12.0;
    pub const WINDOW_HEIGHT: f32 = 14.0;

    /// Centered grid of alternating lit and dark windows, leaving a footer strip.
    pub fn windows(&self) -> Vec<WindowCell> {
        let (pad_x, pad_y) = (8.0, 12.0);
        let (gap_x, gap_y) = (6.0, 6.0);
        let usable_w = self.width - 2.0 * pad_x;
        let usable_h = self.height - pad_y - 22.0;
        if usable_w <= 0.0 || usable_h <= 0.0 {
            return Vec::new();
        }

        let cols = ((usable_w + gap_x) / (Self::WINDOW_WIDTH + gap_x)).floor().max(1.0) as usize;
        let rows = ((usable_h + gap_y) / (Self::WINDOW_HEIGHT + gap_y)).floor().max(1.0) as usize;
        let grid_w = cols as f32 * Self::WINDOW_WIDTH + (cols as f32 - 1.0) * gap_x;
        let start_x = pad_x + ((usable_w - grid_w) / 2.0).floor().max(0.0);

        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(WindowCell {
                    x: start_x + c as f32 * (Self::WINDOW_WIDTH + gap_x),
                    y: pad_y + r as f32 * (Self::WINDOW_HEIGHT + gap_y),
                    lit: (r + c) % 2 == 0,
                });
            }
        }
        cells
    }
}

/// World layout of the scrolling background, in screen pixels at zero offset.
#[derive(Resource, Debug, Clone)]
pub struct Scenery {
    pub clouds: Vec<Cloud>,
    pub buildings: Vec<Building>,
    pub stripes: Vec<f32>,
    pub trees: Vec<Tree>,
    pub grass: Vec<GrassPatch>,
    pub pad_a_x: f32,
    pub pad_b_x: f32,
}

impl Default for Scenery {
    fn default() -> Self {
        let clouds = [(200.0, 80.0), (500.0, 110.0), (900.0, 70.0), (1200.0, 130.0), (1600.0, 90.0)]
            .into_iter()
            .map(|(x, y)| Cloud { x, y })
            .collect();

        let buildings = [
            (300.0, 90.0, 210.0),
            (620.0, 120.0, 180.0),
            (960.0, 100.0, 200.0),
            (1320.0, 140.0, 230.0),
            (1680.0, 110.0, 190.0),
        ]
        .into_iter()
        .map(|(x, width, height)| Building { x, width, height })
        .collect();

        let stripes = (0..40).map(|i| i as f32 * 120.0).collect();

        // Deterministic variety along the track
        let trees = (0..38)
            .map(|i| Tree {
                x: (140 + i * 160 + (40.0 * (i as f32 * 0.8).sin()) as i32) as f32,
                size: (52 + (i % 5) * 10) as f32,
            })
            .collect();

        let grass = (0..200)
            .map(|i| GrassPatch {
                x: (i * 30 + (15.0 * (i as f32 * 1.3).sin()) as i32) as f32,
                y_offset: (5 + (i % 4) * 8) as f32,
                blade_heights: std::array::from_fn(|j| (8 + (j as i32 * 3 + i) % 12) as f32),
            })
            .collect();

        Self {
            clouds,
            buildings,
            stripes,
            trees,
            grass,
            pad_a_x: 50.0,
            pad_b_x: 1500.0,
        }
    }
}

impl Scenery {
    /// Screen x of a feature on a layer with the given parallax depth.
    pub fn screen_x(world_x: f32, horizontal_offset: f32, depth: f32) -> f32 {
        world_x - horizontal_offset * depth
    }

    /// Whether landing pad B sits directly under the helicopter.
    pub fn pad_b_aligned(&self, horizontal_offset: f32, helicopter_screen_x: f32) -> bool {
        let pad_x = Self::screen_x(self.pad_b_x, horizontal_offset, GROUND_DEPTH);
        (pad_x - helicopter_screen_x).abs() < PAD_ALIGNMENT_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout_sizes() {
        let scenery = Scenery::default();
        assert_eq!(scenery.clouds.len(), 5);
        assert_eq!(scenery.buildings.len(), 5);
        assert_eq!(scenery.stripes.len(), 40);
        assert_eq!(scenery.trees.len(), 38);
        assert_eq!(scenery.grass.len(), 200);
    }

    #[test]
    fn test_tree_placement_is_deterministic() {
        let scenery = Scenery::default();
        assert_eq!(scenery.trees[0], Tree { x: 140.0, size: 52.0 });
        // 300 + trunc(40 * sin(0.8)) = 300 + 28
        assert_eq!(scenery.trees[1], Tree { x: 328.0, size: 62.0 });
        assert_eq!(scenery.grass[1].blade_heights, [9.0, 12.0, 15.0, 18.0, 9.0]);
    }

    #[test]
    fn test_window_grid_fits_building() {
        let building = Building {
            x: 0.0,
            width: 90.0,
            height: 210.0,
        };
        let windows = building.windows();

        // 4 columns of 12px and 9 rows of 14px, 6px gaps
        assert_eq!(windows.len(), 36);
        assert!(windows[0].lit);
        assert!(!windows[1].lit);
        for cell in &windows {
            assert!(cell.x >= 8.0);
            assert!(cell.x + Building::WINDOW_WIDTH <= building.width - 8.0);
            assert!(cell.y + Building::WINDOW_HEIGHT <= building.height - 22.0);
        }
    }

    #[test]
    fn test_tiny_building_has_no_windows() {
        let building = Building {
            x: 0.0,
            width: 10.0,
            height: 20.0,
        };
        assert!(building.windows().is_empty());
    }

    #[test]
    fn test_parallax_depths_scroll_at_different_rates() {
        let near = Scenery::screen_x(500.0, 100.0, GROUND_DEPTH);
        let mid = Scenery::screen_x(500.0, 100.0, BUILDING_DEPTH);
        let far = Scenery::screen_x(500.0, 100.0, CLOUD_DEPTH);
        assert_eq!(near, 400.0);
        assert_eq!(mid, 420.0);
        assert_eq!(far, 450.0);
    }

    #[test]
    fn test_pad_b_alignment() {
        let scenery = Scenery::default();
        assert!(!scenery.pad_b_aligned(0.0, 315.0));
        assert!(scenery.pad_b_aligned(1185.0, 315.0));
        assert!(scenery.pad_b_aligned(1190.0, 315.0));
        assert!(!scenery.pad_b_aligned(1191.0, 315.0));
    }
}
