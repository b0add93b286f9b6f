use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use infix_calculator::Calculator;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let mut calculator = Calculator::new();
    calculator.variables_mut().set("x", 3.0);
    calculator.variables_mut().set("ans", 42.0);
    let expressions = [
        "1 + 1".to_string(),
        "3 * 2 + 4 * 5 - 6 / 3".to_string(),
        "2^3^2".to_string(),
        "x^3 + 2 * x^2 - 4 * x + 3".to_string(),
        "((x + 2) * (ans - 4)) / (x^2 + -1)".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculator.evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
