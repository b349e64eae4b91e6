use sgd_mlp::Tensor;

// Helper function to compare tensors with floating point tolerance
fn tensors_equal(a: &Tensor, b: &Tensor, tolerance: f32) -> bool {
    if a.shape() != b.shape() {
        return false;
    }

    a.data().iter()
        .zip(b.data().iter())
        .all(|(x, y)| (x - y).abs() <= tolerance)
}

fn create_test_tensor(data: Vec<f32>, rows: usize, cols: usize) -> Tensor {
    Tensor::new(data, rows, cols).unwrap()
}

#[test]
fn test_basic_matrix_multiplication() {
    let a = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = create_test_tensor(vec![5.0, 6.0, 7.0, 8.0], 2, 2);

    // Expected result: [[19, 22], [43, 50]]
    let expected = create_test_tensor(vec![19.0, 22.0, 43.0, 50.0], 2, 2);

    assert!(tensors_equal(&a.mul(&b), &expected, f32::EPSILON));
}

#[test]
fn test_identity_matrix_multiplication() {
    let a = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let identity = create_test_tensor(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0], 3, 3);

    assert_eq!(a.mul(&identity), a);
}

#[test]
fn test_rectangular_matrices() {
    // (2x3) * (3x2)
    let a = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let b = create_test_tensor(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2);

    let expected = create_test_tensor(vec![58.0, 64.0, 139.0, 154.0], 2, 2);
    let result = a.mul(&b);

    assert_eq!(result.shape(), (2, 2));
    assert!(tensors_equal(&result, &expected, 1e-5));
}

#[test]
fn test_matrix_vector_multiplication() {
    let m = create_test_tensor(vec![1.0, 0.5, 0.125, 0.25, 0.03125, 0.0625], 2, 3);
    let v = Tensor::column(vec![1.0, 1.0, 1.0]);

    let expected = Tensor::column(vec![1.625, 0.34375]);

    assert!(tensors_equal(&m.mul(&v), &expected, 1e-6));
}

#[test]
fn test_negative_values() {
    let a = create_test_tensor(vec![-1.0, 2.0, -3.0, 4.0], 2, 2);
    let b = create_test_tensor(vec![5.0, -6.0, 7.0, -8.0], 2, 2);

    let expected = create_test_tensor(vec![9.0, -10.0, 13.0, -14.0], 2, 2);

    assert!(tensors_equal(&a.mul(&b), &expected, f32::EPSILON));
}

#[test]
#[should_panic(expected = "Matrix dimensions don't match")]
fn test_incompatible_dimensions() {
    let a = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let b = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    a.mul(&b);
}

#[test]
fn test_transpose() {
    let a = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let t = a.transpose();

    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(t.transpose(), a);
}

#[test]
fn test_transpose_column_to_row() {
    let v = Tensor::column(vec![1.0, 2.0, 3.0]);
    let t = v.transpose();

    assert_eq!(t.shape(), (1, 3));
    assert_eq!(t.data(), v.data());
}

#[test]
fn test_outer_product() {
    let a = Tensor::column(vec![1.0, 2.0, 3.0]);
    let b = Tensor::column(vec![4.0, 5.0]);

    let expected = create_test_tensor(vec![4.0, 5.0, 8.0, 10.0, 12.0, 15.0], 3, 2);
    let outer = a.outer(&b);

    assert_eq!(outer.shape(), (3, 2));
    assert!(tensors_equal(&outer, &expected, f32::EPSILON));

    // a · bᵀ as a plain product of a column and a row
    assert_eq!(outer, a.mul(&b.transpose()));
}
