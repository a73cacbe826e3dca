use crate::Primitive;

/// A cluster: stable id, current centroid, and the positions (into the run's
/// point slice) of the points assigned to it by the most recent assignment
/// pass.
///
/// The member set is transient per-iteration evidence: it is rebuilt from
/// empty on every assignment pass and cleared again by the update engine once
/// the centroid has been recomputed. The centroid always has the run's
/// dimensionality D.
#[derive(Clone, Debug)]
pub struct Cluster<T: Primitive> {
    id: usize,
    centroid: Vec<T>,
    members: Vec<usize>,
}

impl<T: Primitive> Cluster<T> {
    pub fn new(id: usize, centroid: Vec<T>) -> Self {
        Self { id, centroid, members: Vec::new() }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn centroid(&self) -> &[T] {
        &self.centroid
    }

    pub fn dims(&self) -> usize {
        self.centroid.len()
    }

    /// Positions of the currently assigned points in the run's point slice.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Replaces the centroid. The new vector must keep the dimensionality D.
    pub fn set_centroid(&mut self, centroid: Vec<T>) {
        debug_assert_eq!(centroid.len(), self.centroid.len());
        self.centroid = centroid;
    }

    pub fn add_member(&mut self, point_idx: usize) {
        self.members.push(point_idx);
    }

    pub fn clear_members(&mut self) {
        self.members.clear();
    }
}
