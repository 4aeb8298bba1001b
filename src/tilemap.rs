use serde::{Deserialize, Serialize};

/// A 2D row-major grid. Cell `(x, y)` lives at index `y * width + x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T> Tilemap<T> {
    /// Build a square map by evaluating `f(x, y)` for every cell in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                data.push(f(x, y));
            }
        }
        Self {
            width: size,
            height: size,
            data,
        }
    }

    /// Row-major index of a cell.
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The cells as one flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut map: Tilemap<u32> = Tilemap::new(4, 3);
        map.set(1, 2, 7);

        assert_eq!(map.index(1, 2), 9);
        assert_eq!(map.as_slice()[9], 7);
        assert_eq!(*map.get(1, 2), 7);
        assert_eq!(map.len(), 12);
    }

    #[test]
    fn test_from_fn_visits_in_row_major_order() {
        let map = Tilemap::from_fn(3, |x, y| (x, y));
        let cells: Vec<_> = map.as_slice().to_vec();
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[1], (1, 0));
        assert_eq!(cells[3], (0, 1));
        assert_eq!(cells[8], (2, 2));

        for (x, y, &(cx, cy)) in map.iter() {
            assert_eq!((x, y), (cx, cy));
        }
    }

    #[test]
    fn test_set_overwrites_default_cells() {
        let mut map: Tilemap<u8> = Tilemap::new(2, 2);
        assert!(map.iter().all(|(_, _, &v)| v == 0));

        map.set(0, 1, 5);
        map.set(0, 1, 6);
        map.set(1, 0, 3);
        assert_eq!(map.into_vec(), vec![0, 3, 6, 0]);
    }
}
