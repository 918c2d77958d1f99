use crate::{access, splice, view};

/// Negative-index access and views in method form.
///
/// Methods are named to stay clear of the inherent slice methods
/// (`get` there takes an unsigned index and returns an `Option`).
pub trait SliceExt<T> {
    fn at(&self, idx: isize) -> &T;
    fn at_mut(&mut self, idx: isize) -> &mut T;
    fn put(&mut self, idx: isize, val: T);
    fn prefix(&self, idx: isize) -> &[T];
    fn suffix(&self, idx: isize) -> &[T];
    fn slice_n(&self, idx: isize, n: usize) -> &[T];
    fn slice_to(&self, from: isize, to: isize) -> &[T];
}

impl<T> SliceExt<T> for [T] {
    fn at(&self, idx: isize) -> &T {
        access::get(self, idx)
    }

    fn at_mut(&mut self, idx: isize) -> &mut T {
        access::get_mut(self, idx)
    }

    fn put(&mut self, idx: isize, val: T) {
        access::put(self, idx, val);
    }

    fn prefix(&self, idx: isize) -> &[T] {
        view::prefix(self, idx)
    }

    fn suffix(&self, idx: isize) -> &[T] {
        view::suffix(self, idx)
    }

    fn slice_n(&self, idx: isize, n: usize) -> &[T] {
        view::slice_n(self, idx, n)
    }

    fn slice_to(&self, from: isize, to: isize) -> &[T] {
        view::slice_to(self, from, to)
    }
}

/// Splicing edits in method form.
pub trait VecExt<T> {
    fn insert_at<I: IntoIterator<Item = T>>(&mut self, idx: isize, vals: I) -> &mut Self;
    fn remove_n(&mut self, idx: isize, n: usize) -> &mut Self;
    fn remove_to(&mut self, from: isize, to: isize) -> &mut Self;
    fn replace_n<I>(&mut self, idx: isize, n: usize, vals: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator;
    fn replace_to<I>(&mut self, from: isize, to: isize, vals: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator;
    fn append_all<I: IntoIterator<Item = T>>(&mut self, vals: I) -> &mut Self;
}

impl<T> VecExt<T> for Vec<T> {
    fn insert_at<I: IntoIterator<Item = T>>(&mut self, idx: isize, vals: I) -> &mut Self {
        splice::insert(self, idx, vals);
        self
    }

    fn remove_n(&mut self, idx: isize, n: usize) -> &mut Self {
        splice::remove_n(self, idx, n);
        self
    }

    fn remove_to(&mut self, from: isize, to: isize) -> &mut Self {
        splice::remove_to(self, from, to);
        self
    }

    fn replace_n<I>(&mut self, idx: isize, n: usize, vals: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        splice::replace_n(self, idx, n, vals);
        self
    }

    fn replace_to<I>(&mut self, from: isize, to: isize, vals: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        splice::replace_to(self, from, to, vals);
        self
    }

    fn append_all<I: IntoIterator<Item = T>>(&mut self, vals: I) -> &mut Self {
        splice::append(self, vals);
        self
    }
}
