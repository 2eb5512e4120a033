//! Device-resident arrays
//!
//! A [`DeviceArray`] is the buffer a simulation hands to the GPU. It keeps a
//! host-side mirror of plain-old-data elements; [`as_bytes`](DeviceArray::as_bytes)
//! is the upload view.

use bytemuck::Pod;

/// Contiguous buffer of plain-old-data elements
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceArray<T> {
    data: Vec<T>,
}

impl<T: Pod> Default for DeviceArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod> DeviceArray<T> {
    /// Create an empty array
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an array of `len` zeroed elements
    pub fn with_len(len: usize) -> Self {
        Self {
            data: vec![T::zeroed(); len],
        }
    }

    /// Create an array holding a copy of `values`
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element `i`, or `None` past the end
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Resize to `len`, zero-filling new elements
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, T::zeroed());
    }

    /// Replace the contents with a copy of `values`
    pub fn assign(&mut self, values: &[T]) {
        self.data.clear();
        self.data.extend_from_slice(values);
    }

    /// Replace the contents with a copy of another array
    pub fn copy_from(&mut self, other: &DeviceArray<T>) {
        self.assign(&other.data);
    }

    /// Replace the contents with `f` applied to every element of `source`
    pub fn map_from<U: Pod, F: FnMut(U) -> T>(&mut self, source: &DeviceArray<U>, f: F) {
        self.data.clear();
        self.data.extend(source.data.iter().copied().map(f));
    }

    /// Elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Raw bytes, as uploaded to the device
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Iterate over the elements
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Free the buffer, leaving an empty array
    pub fn release(&mut self) {
        self.data = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physika_math::Vector3;

    #[test]
    fn test_with_len_is_zeroed() {
        let a = DeviceArray::<Vector3<f32>>::with_len(3);
        assert_eq!(a.len(), 3);
        assert!(a.iter().all(|v| *v == Vector3::zeros()));
    }

    #[test]
    fn test_resize_keeps_prefix() {
        let mut a = DeviceArray::from_slice(&[1.0f64, 2.0]);
        a.resize(4);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 0.0, 0.0]);
        a.resize(1);
        assert_eq!(a.as_slice(), &[1.0]);
    }

    #[test]
    fn test_assign_and_copy_from() {
        let mut a = DeviceArray::<u32>::with_len(5);
        a.assign(&[7, 8]);
        assert_eq!(a.as_slice(), &[7, 8]);

        let mut b = DeviceArray::new();
        b.copy_from(&a);
        assert_eq!(a, b);
    }

    #[test]
    fn test_map_from() {
        let source = DeviceArray::from_slice(&[1.0f32, 2.0, 3.0]);
        let mut target = DeviceArray::<f32>::with_len(10);
        target.map_from(&source, |x| x * 2.0);
        assert_eq!(target.as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_as_bytes() {
        let a = DeviceArray::from_slice(&[Vector3::new([1.0f32, 2.0, 3.0])]);
        assert_eq!(a.as_bytes().len(), 3 * std::mem::size_of::<f32>());
        let back: &[f32] = bytemuck::cast_slice(a.as_bytes());
        assert_eq!(back, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_release() {
        let mut a = DeviceArray::<u8>::with_len(16);
        a.release();
        assert!(a.is_empty());
    }

    #[test]
    fn test_as_mut_slice() {
        let mut a = DeviceArray::<i32>::with_len(2);
        a.as_mut_slice()[1] = 5;
        assert_eq!(a.get(1), Some(&5));
        assert_eq!(a.get(2), None);
    }
}
