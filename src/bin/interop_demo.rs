use anyhow::{Context, Result};
use example_tools::core::interop::{
    add, count_words, create_shared_resource, divide_with_remainder, greet, integrate,
    matrix_multiply, multiply, process_with_callback, square_array, square_elements, Circle,
    Matrix, Rectangle, SensorProcessor, Shape, Vector2D,
};
use example_tools::utils::logger;

fn section(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(70));
}

fn main() -> Result<()> {
    logger::init_cli_logger(false);

    let rule = "=".repeat(70);
    println!("{}", rule);
    println!("EXTENSION API SMOKE TEST");
    println!("{}", rule);

    section("1. SIMPLE FUNCTIONS:");
    println!("add(5, 3) = {}", add(5, 3)?);
    println!("multiply(4.5) = {} (default arg: 2.0)", multiply(4.5, None));
    println!("multiply(4.5, 3.0) = {}", multiply(4.5, Some(3.0)));
    let (quotient, remainder) = divide_with_remainder(17, 5)?;
    println!("divide_with_remainder(17, 5) = ({}, {})", quotient, remainder);
    println!("greet(\"World\") = '{}'", greet("World"));

    section("2. CONTAINERS:");
    let numbers = [1, 2, 3, 4, 5];
    println!("square_elements({:?}) = {:?}", numbers, square_elements(&numbers)?);
    let words = ["hello", "world", "hello", "python", "world"];
    println!("count_words({:?})", words);
    println!("  Result: {:?}", count_words(&words));

    section("3. VALUE TYPES:");
    let mut v1 = Vector2D::new(3.0, 4.0);
    let v2 = Vector2D::new(1.0, 2.0);
    println!("v1 = {}", v1);
    println!("v2 = {}", v2);
    println!("v1.length() = {}", v1.length());
    println!("v1 + v2 = {}", v1 + v2);
    println!("v1 * 2.0 = {}", v1 * 2.0);
    v1.x = 10.0;
    println!("After v1.x = 10.0: v1 = {}", v1);
    println!("Vector2D::zero() = {}", Vector2D::zero());

    section("4. POLYMORPHISM:");
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new("Circle1", 5.0)),
        Box::new(Rectangle::new("Rect1", 4.0, 6.0)),
        Box::new(Circle::new("Circle2", 3.0)),
    ];
    for shape in &shapes {
        println!("{}: area = {:.2}", shape.name(), shape.area());
    }

    section("5. CALLBACKS:");
    let data = [1, 2, 3, 4, 5];
    println!("Data: {:?}", data);
    println!("Transform: x -> 2*x + 1");
    println!("Result: {:?}", process_with_callback(&data, |x| x * 2 + 1));
    println!("\nTransform: x -> x^2");
    println!("Result: {:?}", process_with_callback(&data, |x| x.pow(2)));

    println!("\nNumerical integration:");
    let area = integrate(|x| x * x, 0.0, 1.0, 10_000)?;
    println!("∫(x² dx) from 0 to 1 = {:.6} (exact: 0.333333)", area);
    let area = integrate(f64::sin, 0.0, std::f64::consts::PI, 10_000)?;
    println!("∫(sin(x) dx) from 0 to π = {:.6} (exact: 2.0)", area);

    section("6. SENSOR DATA PROCESSING:");
    let mut processor = SensorProcessor::new();
    processor.add_reading(0.0, 25.5, "TEMP_01");
    processor.add_reading(1.0, 26.2, "TEMP_01");
    processor.add_reading(2.0, 24.8, "TEMP_02");
    processor.add_reading(3.0, 27.1, "TEMP_01");
    processor.add_reading(4.0, 23.5, "TEMP_02");
    println!("Total readings: {}", processor.reading_count());
    println!("Values: {:?}", processor.process_readings(|r| r.value));

    println!("\nReadings with temp > 25.0:");
    for reading in processor.filter_readings(|r| r.value > 25.0) {
        println!(
            "  t={}, value={}, id={}",
            reading.timestamp, reading.value, reading.sensor_id
        );
    }
    let temp01 = processor.filter_readings(|r| r.sensor_id == "TEMP_01");
    println!("\nTEMP_01 readings: {}", temp01.len());

    section("7. ARRAYS:");
    let arr = [1.0, 2.0, 3.0, 4.0, 5.0];
    println!("Input:   {:?}", arr);
    println!("Squared: {:?}", square_array(&arr));

    println!("\nMatrix multiplication:");
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    let c = matrix_multiply(&a, &b).context("multiplying 2x2 matrices")?;
    println!("A =\n{}", a);
    println!("\nB =\n{}", b);
    println!("\nA @ B =\n{}", c);
    let expected = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]])?;
    if c.approx_eq(&expected, 1e-9) {
        println!("\n✓ Result matches the reference product!");
    } else {
        anyhow::bail!("matrix product mismatch: got\n{}", c);
    }

    section("8. OWNED RESOURCES:");
    println!("Creating resource...");
    let resource = create_shared_resource("MyResource", 42);
    println!("Resource: {}, ID: {}", resource.name(), resource.id());
    println!("Deleting resource...");
    drop(resource);
    println!("Resource released when its last owner was dropped.");

    println!("\n{}", rule);
    println!("ALL TESTS PASSED!");
    println!("{}", rule);
    Ok(())
}
