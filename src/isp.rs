//! Pattern 4: Interface Segregation
//!
//! With one `Shape` trait (`violated`), flat shapes must answer `volume()`
//! and can only fail. The `followed` design splits the trait so only solids
//! carry a volume.

use crate::config::Scenario;
use crate::console::{self, Transcript};
use crate::error::ShapeError;

fn area_line(name: &str, area: f64) -> String {
    format!("Area of {} : {}", name, console::amount(area))
}

fn volume_line(name: &str, volume: f64) -> String {
    format!("Volume of {} : {}", name, console::amount(volume))
}

// ============================================================================
// Violated: a fat trait
// ============================================================================

pub mod violated {
    use super::*;

    pub trait Shape {
        fn name(&self) -> &'static str;
        fn area(&self) -> f64;
        fn volume(&self) -> Result<f64, ShapeError>;
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Square {
        pub side: f64,
    }

    impl Square {
        pub fn new(side: f64) -> Self {
            Self { side }
        }
    }

    impl Shape for Square {
        fn name(&self) -> &'static str {
            "Square"
        }

        fn area(&self) -> f64 {
            self.side * self.side
        }

        fn volume(&self) -> Result<f64, ShapeError> {
            Err(ShapeError::VolumeUnsupported { shape: self.name() })
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Rectangle {
        pub length: f64,
        pub breadth: f64,
    }

    impl Rectangle {
        pub fn new(length: f64, breadth: f64) -> Self {
            Self { length, breadth }
        }
    }

    impl Shape for Rectangle {
        fn name(&self) -> &'static str {
            "Rectangle"
        }

        fn area(&self) -> f64 {
            self.length * self.breadth
        }

        fn volume(&self) -> Result<f64, ShapeError> {
            Err(ShapeError::VolumeUnsupported { shape: self.name() })
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Cube {
        pub side: f64,
    }

    impl Cube {
        pub fn new(side: f64) -> Self {
            Self { side }
        }
    }

    impl Shape for Cube {
        fn name(&self) -> &'static str {
            "Cube"
        }

        // Surface area
        fn area(&self) -> f64 {
            6.0 * self.side * self.side
        }

        fn volume(&self) -> Result<f64, ShapeError> {
            Ok(self.side * self.side * self.side)
        }
    }

    /// Report area and volume for every shape, printing the failure message
    /// when a shape has no volume.
    pub fn measure_all(shapes: &[Box<dyn Shape>]) -> Transcript {
        let mut out = Transcript::new();
        for shape in shapes {
            out.line(area_line(shape.name(), shape.area()));
            match shape.volume() {
                Ok(volume) => out.line(volume_line(shape.name(), volume)),
                Err(err) => {
                    tracing::warn!(shape = shape.name(), "volume unsupported");
                    out.line(err);
                }
            }
        }
        out
    }

    /// Everything `p4_isp_violated` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let dims = scenario.isp.violated;
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Square::new(dims.square_side)),
            Box::new(Rectangle::new(dims.rectangle_length, dims.rectangle_breadth)),
            Box::new(Cube::new(dims.cube_side)),
        ];
        measure_all(&shapes)
    }
}

// ============================================================================
// Followed: 2-D and 3-D capabilities
// ============================================================================

pub mod followed {
    use super::*;

    pub trait TwoDimensionalShape {
        fn name(&self) -> &'static str;
        fn area(&self) -> f64;
    }

    pub trait ThreeDimensionalShape: TwoDimensionalShape {
        fn volume(&self) -> f64;
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Square {
        pub side: f64,
    }

    impl Square {
        pub fn new(side: f64) -> Self {
            Self { side }
        }
    }

    impl TwoDimensionalShape for Square {
        fn name(&self) -> &'static str {
            "Square"
        }

        fn area(&self) -> f64 {
            self.side * self.side
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Rectangle {
        pub length: f64,
        pub breadth: f64,
    }

    impl Rectangle {
        pub fn new(length: f64, breadth: f64) -> Self {
            Self { length, breadth }
        }
    }

    impl TwoDimensionalShape for Rectangle {
        fn name(&self) -> &'static str {
            "Rectangle"
        }

        fn area(&self) -> f64 {
            self.length * self.breadth
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Cube {
        pub side: f64,
    }

    impl Cube {
        pub fn new(side: f64) -> Self {
            Self { side }
        }
    }

    impl TwoDimensionalShape for Cube {
        fn name(&self) -> &'static str {
            "Cube"
        }

        fn area(&self) -> f64 {
            6.0 * self.side * self.side
        }
    }

    impl ThreeDimensionalShape for Cube {
        fn volume(&self) -> f64 {
            self.side * self.side * self.side
        }
    }

    pub fn describe_area(shape: &dyn TwoDimensionalShape) -> String {
        tracing::debug!(shape = shape.name(), "measuring area");
        area_line(shape.name(), shape.area())
    }

    pub fn describe_volume(shape: &dyn ThreeDimensionalShape) -> String {
        tracing::debug!(shape = shape.name(), "measuring volume");
        volume_line(shape.name(), shape.volume())
    }

    /// Everything `p4_isp_followed` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let dims = scenario.isp.followed;
        let mut out = Transcript::new();

        let square = Square::new(dims.square_side);
        out.line(describe_area(&square));

        let rectangle = Rectangle::new(dims.rectangle_length, dims.rectangle_breadth);
        out.line(describe_area(&rectangle));

        // Only solids expose volume(); calling it on `square` would not compile
        let cube = Cube::new(dims.cube_side);
        out.line(describe_area(&cube));
        out.line(describe_volume(&cube));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::followed::{ThreeDimensionalShape, TwoDimensionalShape};
    use super::violated::Shape;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_closed_form_areas() {
        assert_eq!(TwoDimensionalShape::area(&followed::Square::new(4.0)), 16.0);
        assert_eq!(TwoDimensionalShape::area(&followed::Rectangle::new(4.0, 5.0)), 20.0);
        assert_eq!(TwoDimensionalShape::area(&followed::Cube::new(3.0)), 54.0);
        assert_eq!(followed::Cube::new(3.0).volume(), 27.0);
    }

    #[test]
    fn test_followed_lines() {
        let cube = followed::Cube::new(3.0);
        assert_eq!(followed::describe_area(&followed::Square::new(4.0)), "Area of Square : 16.0");
        assert_eq!(followed::describe_area(&cube), "Area of Cube : 54.0");
        assert_eq!(followed::describe_volume(&cube), "Volume of Cube : 27.0");
    }

    #[test]
    fn test_flat_shapes_fail_on_volume() {
        assert_eq!(
            violated::Square::new(5.0).volume(),
            Err(ShapeError::VolumeUnsupported { shape: "Square" })
        );
        assert!(violated::Rectangle::new(5.0, 10.0).volume().is_err());
        assert_eq!(violated::Cube::new(5.0).volume(), Ok(125.0));
    }

    #[test]
    fn test_measure_all_reports_failures_inline() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(violated::Square::new(5.0)),
            Box::new(violated::Rectangle::new(5.0, 10.0)),
            Box::new(violated::Cube::new(5.0)),
        ];

        assert_eq!(
            violated::measure_all(&shapes).lines(),
            [
                "Area of Square : 25.0",
                "Volume of Square : not supported for 2D shape",
                "Area of Rectangle : 50.0",
                "Volume of Rectangle : not supported for 2D shape",
                "Area of Cube : 150.0",
                "Volume of Cube : 125.0",
            ]
        );
    }

    #[test]
    fn test_solid_is_also_flat() {
        let shapes: Vec<Box<dyn TwoDimensionalShape>> = vec![
            Box::new(followed::Square::new(1.0)),
            Box::new(followed::Cube::new(1.0)),
        ];
        let total: f64 = shapes.iter().map(|s| s.area()).sum();
        assert_eq!(total, 7.0);
    }

    proptest! {
        #[test]
        fn test_area_non_negative(side in 0.0f64..1e6, length in 0.0f64..1e6, breadth in 0.0f64..1e6) {
            let square = followed::Square::new(side);
            let rectangle = followed::Rectangle::new(length, breadth);
            let cube = followed::Cube::new(side);

            prop_assert!(TwoDimensionalShape::area(&square) >= 0.0);
            prop_assert!(TwoDimensionalShape::area(&rectangle) >= 0.0);
            prop_assert!(TwoDimensionalShape::area(&cube) >= 0.0);
            prop_assert_eq!(TwoDimensionalShape::area(&square), side * side);
            prop_assert_eq!(Shape::area(&violated::Rectangle::new(length, breadth)), length * breadth);
        }
    }
}
