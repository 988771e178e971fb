/// A bounded 2D grid stored row-major.
///
/// Coordinates are `(x, z)` with `x` in `0..width` and `z` in `0..height`.
/// Terrain patches do not wrap, so indexing outside the grid panics.
#[derive(Clone, Debug, PartialEq)]
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

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: usize, z: usize) -> usize {
        assert!(x < self.width && z < self.height, "({}, {}) outside {}x{}", x, z, self.width, self.height);
        z * self.width + x
    }

    pub fn get(&self, x: usize, z: usize) -> &T {
        &self.data[self.index(x, z)]
    }

    pub fn set(&mut self, x: usize, z: usize, value: T) {
        let idx = self.index(x, z);
        self.data[idx] = value;
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let z = idx / width;
            (x, z, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let z = idx / width;
            (x, z, val)
        })
    }
}

impl Tilemap<f32> {
    /// Smallest and largest value in the map, or `None` for an empty map.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        let mut min_h = f32::MAX;
        let mut max_h = f32::MIN;
        for &h in &self.data {
            if h < min_h { min_h = h; }
            if h > max_h { max_h = h; }
        }
        Some((min_h, max_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut map = Tilemap::new_with(3, 2, 0u8);
        map.set(2, 1, 7);
        assert_eq!(*map.get(2, 1), 7);

        let found: Vec<_> = map.iter().filter(|(_, _, v)| **v == 7).map(|(x, z, _)| (x, z)).collect();
        assert_eq!(found, vec![(2, 1)]);
    }

    #[test]
    #[should_panic]
    fn test_get_past_right_edge_does_not_wrap() {
        let map: Tilemap<f32> = Tilemap::new(4, 3);
        map.get(4, 0);
    }

    #[test]
    fn test_value_range() {
        let mut map = Tilemap::new_with(4, 4, 0.25f32);
        map.set(1, 1, 0.9);
        map.set(3, 0, 0.1);
        assert_eq!(map.value_range(), Some((0.1, 0.9)));

        let empty: Tilemap<f32> = Tilemap::new(0, 0);
        assert_eq!(empty.value_range(), None);
    }

    #[test]
    fn test_iter_mut_visits_every_cell() {
        let mut map = Tilemap::new_with(5, 2, 0.0f32);
        for (x, z, v) in map.iter_mut() {
            *v = (x + z * 10) as f32;
        }
        assert_eq!(*map.get(4, 1), 14.0);
        assert_eq!(*map.get(0, 0), 0.0);
    }
}
