// Copyright (c) 2019-2022  resdhw contributors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// -----------------------------------------------------------------------------------
// Vector utilities for daily/hourly series
// -----------------------------------------------------------------------------------

use num::Float;

// Multiply series by scalar
pub fn veckmul<T: Float>(vec1: &[T], k: T) -> Vec<T> {
    vec1.iter().map(|el| *el * k).collect()
}

// Sum all elements in a series
pub fn vecsum<'a, T>(vec: &'a [T]) -> T
where
    T: Float + std::iter::Sum<&'a T>,
{
    vec.iter().sum()
}

// Round every element to `decimals` decimal places.
// Downstream schedule generation assumes fixed-precision series values.
pub fn vecround<T: Float>(vec: &[T], decimals: i32) -> Vec<T> {
    vec.iter().map(|el| kround(*el, decimals)).collect()
}

// Round a value to `decimals` decimal places
pub fn kround<T: Float>(value: T, decimals: i32) -> T {
    let k = T::from(10.0_f64.powi(decimals)).unwrap();
    (value * k).round() / k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vecops_veckmul() {
        assert_eq!(vec![2.0, 4.0, 6.0], veckmul(&[1.0, 2.0, 3.0], 2.0));
    }

    #[test]
    fn vecops_vecsum() {
        assert_eq!(9.0, vecsum(&[2.0, 3.0, 4.0]));
    }

    #[test]
    fn vecops_vecround() {
        assert_eq!(vec![54.123, 60.0], vecround(&[54.123_45, 59.999_6], 3));
        assert_eq!(0.6923, kround(0.692_307_7, 4));
    }
}
