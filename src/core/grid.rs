use crate::core::constants::H_K;
use crate::core::dimensions::HexDims;
use crate::util::coord::{
    Coordinate, LatLng, Location, coordinate_to_location, location_to_coordinate,
};

/// Snaps a point on the working plane to the lattice address of the hex containing it.
///
/// The result is already passed through [`adjust_coordinate`].
pub fn point_to_grid(point: &Coordinate, level: u8) -> Coordinate {
    let dims = HexDims::for_level(level);

    let pos_x = (point.x + point.y / H_K) / dims.unit_x;
    let pos_y = (point.y - H_K * point.x) / dims.unit_y;

    let x0 = pos_x.floor();
    let y0 = pos_y.floor();
    let xq = pos_x - x0;
    let yq = pos_y - y0;

    // Round half up; the triangle tests below override it inside the
    // parallelogram's corner regions.
    let mut x = (pos_x + 0.5).floor();
    let mut y = (pos_y + 0.5).floor();

    if yq > -xq + 1.0 {
        if yq < 2.0 * xq && yq > 0.5 * xq {
            x = x0 + 1.0;
            y = y0 + 1.0;
        }
    } else if yq < -xq + 1.0 && yq > (2.0 * xq) - 1.0 && yq < (0.5 * xq) + 0.5 {
        x = x0;
        y = y0;
    }

    adjust_coordinate(&Coordinate::new(x, y), level)
}

/// Lattice address of the hex at `level` containing `location`.
pub fn location_to_grid<L: LatLng>(location: &L, level: u8) -> Coordinate {
    point_to_grid(&location_to_coordinate(location), level)
}

/// Folds a lattice address back into the canonical range for `level`.
///
/// Addresses past the antimeridian are wrapped to the other side of the
/// globe. An address exactly on it with `x > y` has its axes swapped and
/// `rev` set. Everything else is returned unchanged.
pub fn adjust_coordinate(coordinate: &Coordinate, level: u8) -> Coordinate {
    let max_steps = HexDims::for_level(level).max_steps;
    let (x, y) = (coordinate.x, coordinate.y);
    let steps = (x - y).abs();

    if steps == max_steps && x > y {
        return Coordinate {
            x: y,
            y: x,
            rev: true,
        };
    }

    if steps > max_steps {
        let dif = steps - max_steps;
        let dif_x = (dif / 2.0).floor();
        let dif_y = dif - dif_x;
        if x > y {
            return Coordinate::new(y + dif_y + dif_x, x - dif_x - dif_y);
        }
        if y > x {
            return Coordinate::new(y - dif_y - dif_x, x + dif_x + dif_y);
        }
    }

    Coordinate::new(x, y)
}

/// Center of the hex at lattice address `grid` on the working plane.
pub fn grid_to_point(grid: &Coordinate, level: u8) -> Coordinate {
    let dims = HexDims::for_level(level);
    let y = (H_K * grid.x * dims.unit_x + grid.y * dims.unit_y) / 2.0;
    let x = (y - grid.y * dims.unit_y) / H_K;
    Coordinate::new(x, y)
}

/// Center of the hex at lattice address `grid` in degrees.
pub fn grid_to_location(grid: &Coordinate, level: u8) -> Location {
    coordinate_to_location(&grid_to_point(grid, level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_cell_zero() {
        let grid = location_to_grid(&Location::new(0.0, 0.0), 0);
        assert_eq!((grid.x, grid.y), (0.0, 0.0));
        assert!(!grid.rev);
    }

    #[test]
    fn test_known_addresses() {
        let tokyo = Location::new(35.647401, 139.716911);
        let expected = [
            (0, 5.0, -2.0),
            (5, 1251.0, -447.0),
            (9, 101307.0, -36195.0),
            (15, 73853199.0, -26386049.0),
        ];
        for (level, x, y) in expected {
            let grid = location_to_grid(&tokyo, level);
            assert_eq!((grid.x, grid.y), (x, y), "level {}", level);
        }
    }

    #[test]
    fn test_center_requantizes_to_itself() {
        let samples = [
            Location::new(35.647401, 139.716911),
            Location::new(-33.8688, 151.2093),
            Location::new(40.7128, -74.006),
            Location::new(-22.9, -43.2),
        ];
        for location in samples {
            for level in 0..=15 {
                let grid = location_to_grid(&location, level);
                let center = grid_to_location(&grid, level);
                let again = location_to_grid(&center, level);
                assert_eq!((grid.x, grid.y), (again.x, again.y), "level {}", level);
            }
        }
    }

    #[test]
    fn test_grid_to_point_inverts_lattice_transform() {
        let dims = HexDims::for_level(4);
        let center = grid_to_point(&Coordinate::new(-170.0, 5.0), 4);
        let pos_x = (center.x + center.y / H_K) / dims.unit_x;
        let pos_y = (center.y - H_K * center.x) / dims.unit_y;
        assert!((pos_x - -170.0).abs() < 1e-9);
        assert!((pos_y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_leaves_interior_untouched() {
        let c = adjust_coordinate(&Coordinate::new(5.0, -2.0), 0);
        assert_eq!(c, Coordinate::new(5.0, -2.0));
    }

    #[test]
    fn test_adjust_swaps_on_antimeridian() {
        let c = adjust_coordinate(&Coordinate::new(4.0, -5.0), 0);
        assert_eq!((c.x, c.y), (-5.0, 4.0));
        assert!(c.rev);

        let unchanged = adjust_coordinate(&Coordinate::new(-5.0, 4.0), 0);
        assert_eq!((unchanged.x, unchanged.y), (-5.0, 4.0));
        assert!(!unchanged.rev);
    }

    #[test]
    fn test_adjust_wraps_past_antimeridian() {
        // dif = 3, split 1 / 2
        let c = adjust_coordinate(&Coordinate::new(6.0, -6.0), 0);
        assert_eq!((c.x, c.y), (-3.0, 3.0));

        let c = adjust_coordinate(&Coordinate::new(-6.0, 6.0), 0);
        assert_eq!((c.x, c.y), (3.0, -3.0));
    }

    #[test]
    fn test_adjust_is_idempotent() {
        let inputs = [
            (6.0, -6.0),
            (4.0, -5.0),
            (-6.0, 6.0),
            (2.0, 1.0),
            (40.0, -2.0),
        ];
        for (x, y) in inputs {
            let once = adjust_coordinate(&Coordinate::new(x, y), 1);
            let twice = adjust_coordinate(&once, 1);
            assert_eq!((once.x, once.y), (twice.x, twice.y), "({}, {})", x, y);
        }
    }
}
