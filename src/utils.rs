// src/utils.rs
use ndarray::{Array1, Array2};

/// Create a meshgrid from x and y arrays, similar to numpy's meshgrid
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let nx = x.len();
    let ny = y.len();

    // Create x grid
    let mut x_grid = Array2::zeros((ny, nx));
    for i in 0..ny {
        x_grid.row_mut(i).assign(x);
    }

    // Create y grid
    let mut y_grid = Array2::zeros((ny, nx));
    for j in 0..nx {
        y_grid.column_mut(j).assign(y);
    }

    (x_grid, y_grid)
}

/// Integer offsets `lo - origin ..= hi - origin` as floats, one per pixel.
pub fn offsets(lo: i64, hi: i64, origin: i64) -> Array1<f64> {
    (lo..=hi).map(|v| (v - origin) as f64).collect()
}

/// Squared distance of every grid point from the origin.
pub fn squared_distance(dx: &Array2<f64>, dy: &Array2<f64>) -> Array2<f64> {
    dx * dx + dy * dy
}

/// `floor(value * factor)`, the truncating conversion every icon measure uses.
#[inline(always)]
pub fn scaled_floor(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn assert_array_almost_equal(a: &Array2<f64>, b: &Array2<f64>, tolerance: f64) {
        assert_eq!(a.shape(), b.shape(), "Arrays have different shapes");

        for ((i, j), &value) in a.indexed_iter() {
            let diff = (value - b[[i, j]]).abs();
            assert!(
                diff < tolerance,
                "Arrays differ at position [{}, {}]: {} vs {} (diff: {})",
                i,
                j,
                value,
                b[[i, j]],
                diff
            );
        }
    }

    #[test]
    fn test_meshgrid() {
        let x = array![0.0, 1.0, 2.0];
        let y = array![10.0, 20.0];
        let (xg, yg) = meshgrid(&x, &y);

        assert_eq!(xg.shape(), &[2, 3]);
        assert_array_almost_equal(&xg, &array![[0.0, 1.0, 2.0], [0.0, 1.0, 2.0]], 1e-12);
        assert_array_almost_equal(&yg, &array![[10.0, 10.0, 10.0], [20.0, 20.0, 20.0]], 1e-12);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(offsets(3, 6, 5), array![-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(offsets(4, 4, 4), array![0.0]);
        assert!(offsets(5, 4, 0).is_empty());
    }

    #[test]
    fn test_squared_distance() {
        let (dx, dy) = meshgrid(&offsets(-1, 1, 0), &offsets(-1, 1, 0));
        let d2 = squared_distance(&dx, &dy);
        let expected = array![[2.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 2.0]];
        assert_array_almost_equal(&d2, &expected, 1e-12);
    }

    #[test]
    fn test_scaled_floor() {
        assert_eq!(scaled_floor(40, 0.4), 16);
        assert_eq!(scaled_floor(167, 0.4), 66);
        assert_eq!(scaled_floor(58, 0.015), 0);
        assert_eq!(scaled_floor(1024, 0.02), 20);
        assert_eq!(scaled_floor(33, 0.7), 23);
    }
}
