use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use sgd_mlp::activation_functions::sigmoid_prime;
use sgd_mlp::backprop::{backprop, one_hot, Gradients};
use sgd_mlp::loss_functions::{LossFunction, Quadratic};
use sgd_mlp::{Error, Network, Tensor};

fn cost(network: &Network, input: &Tensor, label: usize) -> f32 {
    let output = network.feed_forward(input).unwrap();
    Quadratic::forward(&output, &one_hot(label, network.output_dim()).unwrap())
}

fn nudge(t: &Tensor, index: usize, delta: f32) -> Tensor {
    let mut data = t.data().to_vec();
    data[index] += delta;
    Tensor::new(data, t.rows(), t.cols()).unwrap()
}

#[test]
fn test_one_hot() {
    assert_eq!(one_hot(2, 4).unwrap(), Tensor::column(vec![0.0, 0.0, 1.0, 0.0]));
    assert!(matches!(one_hot(4, 4), Err(Error::LabelOutOfRange { label: 4, classes: 4 })));
}

#[test]
fn test_gradient_shapes_align_with_parameters() {
    let network = Network::new(&[5, 4, 3, 2], &mut Pcg64::seed_from_u64(11)).unwrap();
    let input = Tensor::column(vec![0.2, -0.1, 0.4, 0.0, 1.0]);

    let grads = backprop(&network, &input, 1).unwrap();

    assert_eq!(grads.num_layers(), 3);
    for i in 0..3 {
        assert_eq!(grads.nabla_w[i].shape(), network.weights(i).unwrap().shape());
        assert_eq!(grads.nabla_b[i].shape(), network.biases(i).unwrap().shape());
    }
}

#[test]
fn test_output_layer_error() {
    let network = Network::new(&[2, 3], &mut Pcg64::seed_from_u64(5)).unwrap();
    let input = Tensor::column(vec![0.5, -1.5]);

    let grads = backprop(&network, &input, 0).unwrap();

    let layer = &network.layers()[0];
    let z = layer.weighted_input(&input);
    let a = network.feed_forward(&input).unwrap();
    let expected = (&a - &one_hot(0, 3).unwrap()).hadamard(&sigmoid_prime(&z));

    assert_eq!(grads.nabla_b[0], expected);
    assert_eq!(grads.nabla_w[0], expected.outer(&input));
}

#[test]
fn test_weight_gradient_is_delta_times_input() {
    let network = Network::new(&[3, 2, 3], &mut Pcg64::seed_from_u64(9)).unwrap();
    let input = Tensor::column(vec![1.0, 1.0, 1.0]);

    let grads = backprop(&network, &input, 2).unwrap();

    // with an all-ones input every column of nabla_w[0] equals nabla_b[0]
    for r in 0..2 {
        for c in 0..3 {
            assert_eq!(grads.nabla_w[0].get(r, c), grads.nabla_b[0].get(r, 0));
        }
    }
}

#[test]
fn test_gradients_match_finite_differences() {
    let network = Network::new(&[4, 3, 3], &mut Pcg64::seed_from_u64(21)).unwrap();
    let input = Tensor::column(vec![0.3, -0.7, 0.5, 0.1]);
    let label = 1;
    let h = 1e-2;

    let grads = backprop(&network, &input, label).unwrap();

    for layer in 0..2 {
        let weights = network.weights(layer).unwrap();
        for k in 0..weights.len() {
            let mut plus = network.clone();
            plus.set_weights(layer, nudge(weights, k, h)).unwrap();
            let mut minus = network.clone();
            minus.set_weights(layer, nudge(weights, k, -h)).unwrap();

            let numeric = (cost(&plus, &input, label) - cost(&minus, &input, label)) / (2.0 * h);
            assert_abs_diff_eq!(grads.nabla_w[layer].data()[k], numeric, epsilon = 1e-3);
        }

        let biases = network.biases(layer).unwrap();
        for k in 0..biases.len() {
            let mut plus = network.clone();
            plus.set_biases(layer, nudge(biases, k, h)).unwrap();
            let mut minus = network.clone();
            minus.set_biases(layer, nudge(biases, k, -h)).unwrap();

            let numeric = (cost(&plus, &input, label) - cost(&minus, &input, label)) / (2.0 * h);
            assert_abs_diff_eq!(grads.nabla_b[layer].data()[k], numeric, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_backprop_rejects_bad_input_and_label() {
    let network = Network::new(&[3, 2], &mut Pcg64::seed_from_u64(0)).unwrap();

    assert!(matches!(
        backprop(&network, &Tensor::column(vec![1.0]), 0),
        Err(Error::InputShape { .. })
    ));
    assert!(matches!(
        backprop(&network, &Tensor::column(vec![1.0, 2.0, 3.0]), 2),
        Err(Error::LabelOutOfRange { .. })
    ));
}

#[test]
fn test_accumulate_sums_layerwise() {
    let network = Network::new(&[3, 2, 2], &mut Pcg64::seed_from_u64(4)).unwrap();
    let a = backprop(&network, &Tensor::column(vec![1.0, 0.0, 0.5]), 0).unwrap();
    let b = backprop(&network, &Tensor::column(vec![0.0, 1.0, -0.5]), 1).unwrap();

    let mut sum = Gradients::zeros_like(&network);
    sum.accumulate(&a);
    sum.accumulate(&b);

    for i in 0..2 {
        assert_eq!(sum.nabla_w[i], &a.nabla_w[i] + &b.nabla_w[i]);
        assert_eq!(sum.nabla_b[i], &a.nabla_b[i] + &b.nabla_b[i]);
    }
}
