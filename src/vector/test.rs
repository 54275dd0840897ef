#[cfg(test)]
mod vector_tests {
    use log::info;
    use oorandom::Rand64;
    use simplelog::{Config, LevelFilter, SimpleLogger};

    use crate::error::VecMatError;
    use crate::vector::Vector;
    use crate::vector_new;

    const TOLERANCE: f64 = 1e-9;

    fn init_logging() {
        // Another test may have installed the logger already.
        let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
    }

    fn random_vector(rng: &mut Rand64, len: usize) -> Vector {
        Vector::new((0..len).map(|_| rng.rand_float() * 20.0 - 10.0).collect())
    }

    #[test]
    fn component_access() {
        let one = vector_new!(1.0, 3.0, 5.0);

        assert_eq!(one.len(), 3);
        assert_eq!(one.component(0).unwrap(), 1.0);
        assert_eq!(one.component(2).unwrap(), 5.0);
        assert_eq!(
            one.component(3),
            Err(VecMatError::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn dot_product() {
        let one = vector_new!(1.0, 3.0, 5.0);
        let two = vector_new!(2.0, 4.0, 6.0);

        assert_eq!(one.dot(&two).unwrap(), 44.0);

        let short = vector_new!(1.0, 2.0);
        assert_eq!(
            one.dot(&short),
            Err(VecMatError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn dot_with_self_is_squared_magnitude() {
        init_logging();
        let mut rng = Rand64::new(7);

        for len in 1..8 {
            let one = random_vector(&mut rng, len);
            let dot = one.dot(&one).unwrap();
            let magnitude = one.magnitude();
            info!("{}: |v|^2 = {}", one, dot);

            assert!((dot - magnitude * magnitude).abs() < TOLERANCE);
        }
    }

    #[test]
    fn cross_product_orthogonal_and_antisymmetric() {
        init_logging();
        let mut rng = Rand64::new(11);

        for _ in 0..10 {
            let one = random_vector(&mut rng, 3);
            let two = random_vector(&mut rng, 3);

            let cross = one.cross(&two).unwrap();
            info!("{} x {} = {}", one, two, cross);

            assert!(cross.dot(&one).unwrap().abs() < TOLERANCE);
            assert!(cross.dot(&two).unwrap().abs() < TOLERANCE);

            let reversed = two.cross(&one).unwrap();
            for i in 0..3 {
                let forward = cross.component(i).unwrap();
                let backward = reversed.component(i).unwrap();
                assert!((forward + backward).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn cross_product_known_value() {
        let one = vector_new!(4.0, 2.0, 0.0);
        let two = vector_new!(3.0, 1.0, -1.0);

        let cross = one.cross(&two).unwrap();
        assert_eq!(cross, vector_new!(-2.0, 4.0, -2.0));
    }

    #[test]
    fn cross_requires_three_components() {
        let one = vector_new!(1.0, 2.0);
        let two = vector_new!(0.0, 0.0, 1.0);

        assert_eq!(
            one.cross(&two),
            Err(VecMatError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            two.cross(&one),
            Err(VecMatError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn scaling() {
        init_logging();
        let mut rng = Rand64::new(13);

        let mut one = vector_new!(1.0, -2.0, 4.0);
        one.scale_by(0.5);
        assert_eq!(one, vector_new!(0.5, -1.0, 2.0));

        // The pure form leaves the receiver untouched.
        let scaled = one.scaled(-2.0);
        assert_eq!(scaled, vector_new!(-1.0, 2.0, -4.0));
        assert_eq!(one, vector_new!(0.5, -1.0, 2.0));

        for _ in 0..10 {
            let v = random_vector(&mut rng, 4);
            let factor = rng.rand_float() * 8.0 - 4.0;
            let magnitude = v.scaled(factor).magnitude();
            assert!((magnitude - factor.abs() * v.magnitude()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn add_in_place() {
        let mut one = vector_new!(1.0, 3.0, 5.0);
        let two = vector_new!(4.0, 2.0, 0.0);

        one.add_in_place(&two).unwrap();
        assert_eq!(one, vector_new!(5.0, 5.0, 5.0));

        let short = vector_new!(1.0, 2.0);
        assert_eq!(
            one.add_in_place(&short),
            Err(VecMatError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn projection_and_scalar_component() {
        let one = vector_new!(3.0, 4.0);
        let axis = vector_new!(2.0, 0.0);

        let projected = one.projection(&axis).unwrap();
        assert_eq!(projected, vector_new!(3.0, 0.0));
        assert!((one.scalar_component(&axis).unwrap() - 3.0).abs() < TOLERANCE);

        let zero = vector_new!(0.0, 0.0);
        assert_eq!(one.projection(&zero), Err(VecMatError::DivisionByZero));
        assert_eq!(one.scalar_component(&zero), Err(VecMatError::DivisionByZero));
    }

    #[test]
    fn angle_ratios() {
        let one = vector_new!(1.0, 0.0, 0.0);
        let two = vector_new!(0.0, 1.0, 0.0);

        assert!(one.cosine_of_angle(&two).unwrap().abs() < TOLERANCE);
        assert!((one.sine_of_angle(&two).unwrap() - 1.0).abs() < TOLERANCE);
        assert!((one.cosine_of_angle(&one).unwrap() - 1.0).abs() < TOLERANCE);

        let zero = vector_new!(0.0, 0.0, 0.0);
        assert_eq!(one.sine_of_angle(&zero), Err(VecMatError::DivisionByZero));
        assert_eq!(one.cosine_of_angle(&zero), Err(VecMatError::DivisionByZero));
    }

    #[test]
    fn clone_is_deep() {
        let one = vector_new!(1.0, 2.0, 3.0);
        let mut copy = one.clone();

        copy.scale_by(10.0);
        assert_eq!(one, vector_new!(1.0, 2.0, 3.0));
        assert_eq!(copy, vector_new!(10.0, 20.0, 30.0));
    }

    #[test]
    fn equality_is_by_value() {
        let one = Vector::new(vec![1.0, 2.0]);
        let two = Vector::new(vec![1.0, 2.0]);
        let three = Vector::new(vec![1.0, 2.0, 0.0]);

        assert_eq!(one, two);
        assert_ne!(one, three);
        assert_ne!(one, Vector::new(vec![1.0, 2.5]));
    }

    #[test]
    fn display_format() {
        let one = vector_new!(1.0, 3.5, 5.0);
        assert_eq!(format!("{}", one), "<1, 3.5, 5>");

        let single = vector_new!(-2.0);
        assert_eq!(format!("{}", single), "<-2>");
    }

    #[test]
    fn from_slice_copies() {
        let data = [1.0, 2.0, 3.0];
        let one = Vector::from(&data[..]);
        assert_eq!(one.as_slice(), &data);
    }
}
