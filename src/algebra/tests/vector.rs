use crate::algebra::*;

#[test]
fn test_new_and_len() {
    let v = Vector::<f64>::new(5, true);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert!(v.iter().all(|&x| x == 0.));

    let v = Vector::<f64>::zeros(0);
    assert!(v.is_empty());
}

#[test]
fn test_checked_access() {
    let mut v = Vector::from(vec![1., 2., 3.]);
    assert_eq!(v.get(2), Ok(3.));
    assert_eq!(
        v.get(3),
        Err(LinalgError::IndexOutOfRange { index: 3, len: 3 })
    );

    v.set(0, -1.).unwrap();
    *v.get_mut(1).unwrap() += 5.;
    assert_eq!(v.as_slice(), &[-1., 7., 3.]);
    assert!(v.set(10, 0.).is_err());
    assert!(v.get_mut(3).is_err());
    v[2] = 4.;
    assert_eq!(v[2], 4.);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let v = Vector::<f64>::zeros(2);
    let _ = v[2];
}

#[test]
fn test_resize_preserves_prefix() {
    // shrink and grow both inside and outside the reuse window
    for &(s, n) in &[(8, 6), (8, 2), (8, 8), (8, 12), (3, 0), (0, 5), (6, 16)] {
        let src: Vec<f64> = (1..=s).map(|x| x as f64).collect();
        let mut v = Vector::from(src.clone());
        v.resize(n, true, true);

        assert_eq!(v.len(), n);
        let keep = usize::min(s, n);
        assert_eq!(&v.as_slice()[..keep], &src[..keep]);
        assert!(v.as_slice()[keep..].iter().all(|&x| x == 0.));
    }
}

#[test]
fn test_resize_hysteresis() {
    let mut v = Vector::from(vec![1., 2., 3., 4., 5., 6., 7., 8.]);

    // in [cap/2, cap]: no reallocation, contents kept even without preserve
    v.resize(4, false, false);
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.as_slice(), &[1., 2., 3., 4.]);

    v.resize(6, false, true);
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.as_slice(), &[1., 2., 3., 4., 0., 0.]);

    // below the window: reallocate to the exact size
    v.resize(3, true, true);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.as_slice(), &[1., 2., 3.]);

    // above the window without preserve: contents dropped
    v.resize(7, false, true);
    assert_eq!(v.capacity(), 7);
    assert_eq!(v.as_slice(), &[0.; 7]);
}

#[test]
fn test_clone_is_deep() {
    let mut v = Vector::from(vec![1., 2., 3., 4.]);
    v.resize(2, false, false);
    let mut w = v.clone();
    assert_eq!(w.capacity(), 2);
    assert_eq!(w, v);

    w[0] = 10.;
    assert_eq!(v[0], 1.);
}

#[test]
fn test_clear() {
    let mut v = Vector::from(vec![1., 2., 3.]);
    v.clear();
    assert_eq!(v.len(), 3);
    assert_eq!(v.as_slice(), &[0., 0., 0.]);
}

#[test]
fn test_add_sub() {
    let x = Vector::from(vec![1., 2., 3.]);
    let y = Vector::from(vec![4., -5., 6.]);

    assert_eq!(x.try_add(&y).unwrap().as_slice(), &[5., -3., 9.]);
    assert_eq!(x.try_sub(&y).unwrap().as_slice(), &[-3., 7., -3.]);

    let mut z = x.clone();
    z.try_add_assign(&y).unwrap().try_sub_assign(&x).unwrap();
    assert_eq!(z, y);

    let short = Vector::from(vec![1., 2.]);
    assert!(matches!(
        x.try_add(&short),
        Err(LinalgError::InvalidArgument(_))
    ));
    assert!(x.try_sub(&short).is_err());

    // failed in place ops leave the target unchanged
    let mut z = x.clone();
    assert!(z.try_add_assign(&short).is_err());
    assert!(z.try_sub_assign(&short).is_err());
    assert_eq!(z, x);
}

#[test]
fn test_scale() {
    let x = Vector::from(vec![1., -2., 3.]);
    assert_eq!((&x * 2.).as_slice(), &[2., -4., 6.]);
    assert_eq!(x.scaled(-1.).as_slice(), &[-1., 2., -3.]);

    let mut y = x.clone();
    y *= 0.5;
    assert_eq!(y.as_slice(), &[0.5, -1., 1.5]);
    y.scale(2.);
    assert_eq!(y, x);
}

#[test]
fn test_dot_and_norms() {
    let x = Vector::from(vec![3., 4., 12.]);
    let y = Vector::from(vec![1., 2., 0.5]);
    assert_eq!(x.dot(&y), Ok(17.));
    assert!(x.dot(&Vector::zeros(2)).is_err());

    assert_eq!(x.norm(), 13.);
    assert_eq!(x.norm_leading(2), Ok(5.));
    assert_eq!(x.norm_leading(0), Ok(0.));
    assert_eq!(x.norm_leading(3), Ok(13.));
    assert!(matches!(
        x.norm_leading(4),
        Err(LinalgError::InvalidArgument(_))
    ));
}
