use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use campus_core::{CourseId, FacultyId, Registry, StudentId};

use bench_config::{create_rng, BenchConfig};
use rand::Rng;

fn get_bench_config() -> BenchConfig {
    let config_path = "target/bench_config.json";
    let mut config = BenchConfig::load_or_default(config_path);
    config.set_param("benchmark_suite", "registry_operations");
    config.set_param("criterion_version", "0.5");
    let _ = config.save(config_path);
    config
}

/// Registry pre-populated with `students` students, `courses` courses,
/// and one faculty member per ten courses.
fn populated_registry(students: u32, courses: u32) -> Registry {
    let registry = Registry::new();
    for f in 0..(courses / 10).max(1) {
        registry
            .add_faculty(FacultyId::new(f), format!("faculty_{}", f))
            .unwrap();
    }
    for c in 0..courses {
        registry
            .add_course(CourseId::new(c), format!("course_{}", c), FacultyId::new(c / 10))
            .unwrap();
    }
    for s in 0..students {
        registry
            .add_student(StudentId::new(s), format!("student_{}", s))
            .unwrap();
    }
    registry
}

fn bench_record_intake(c: &mut Criterion) {
    let config = get_bench_config();
    let mut group = c.benchmark_group("registry_intake");

    group.bench_function("add_student", |b| {
        let registry = Registry::new();
        let mut rng = create_rng(&config);
        b.iter(|| {
            let id: u32 = rng.gen();
            let result = registry.add_student(StudentId::new(id), "bench student");
            black_box(result.unwrap())
        });
    });

    group.bench_function("add_course", |b| {
        let registry = Registry::new();
        let mut rng = create_rng(&config);
        b.iter(|| {
            let id: u32 = rng.gen();
            let result = registry.add_course(CourseId::new(id), "bench course", FacultyId::new(1));
            black_box(result.unwrap())
        });
    });

    // Batch intake into a fresh registry
    for batch_size in [100u32, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("add_student_batch", batch_size),
            batch_size,
            |b, &n| {
                b.iter(|| {
                    let registry = Registry::new();
                    for i in 0..n {
                        registry
                            .add_student(StudentId::new(i), format!("student_{}", i))
                            .unwrap();
                    }
                    black_box(registry)
                });
            },
        );
    }

    group.finish();
}

fn bench_associations(c: &mut Criterion) {
    let config = get_bench_config();
    let mut group = c.benchmark_group("registry_associations");

    group.bench_function("enroll_in_course", |b| {
        let registry = populated_registry(1_000, 100);
        let mut rng = create_rng(&config);
        b.iter(|| {
            let student = StudentId::new(rng.gen_range(0..1_000));
            let course = CourseId::new(rng.gen_range(0..100));
            registry.enroll_in_course(student, course).unwrap();
            black_box(())
        });
    });

    group.bench_function("assign_course", |b| {
        let registry = populated_registry(10, 100);
        let mut rng = create_rng(&config);
        b.iter(|| {
            let faculty = FacultyId::new(rng.gen_range(0..10));
            let course = CourseId::new(rng.gen_range(0..100));
            registry.assign_course(faculty, course).unwrap();
            black_box(())
        });
    });

    group.finish();
}

fn bench_association_reads(c: &mut Criterion) {
    let config = get_bench_config();
    let mut group = c.benchmark_group("registry_reads");

    group.bench_function("get_student_courses", |b| {
        let registry = populated_registry(1_000, 100);
        let mut rng = create_rng(&config);
        for s in 0..1_000u32 {
            for c in 0..5u32 {
                registry
                    .enroll_in_course(StudentId::new(s), CourseId::new((s + c) % 100))
                    .unwrap();
            }
        }
        b.iter(|| {
            let student = StudentId::new(rng.gen_range(0..1_000));
            black_box(registry.get_student_courses(student))
        });
    });

    // Roster snapshots at varying roster sizes; each read clones the set
    for roster_size in [10u32, 100, 1_000].iter() {
        group.throughput(Throughput::Elements(*roster_size as u64));
        group.bench_with_input(
            BenchmarkId::new("get_course_students", roster_size),
            roster_size,
            |b, &n| {
                let registry = populated_registry(n, 1);
                for s in 0..n {
                    registry
                        .enroll_in_course(StudentId::new(s), CourseId::new(0))
                        .unwrap();
                }
                b.iter(|| black_box(registry.get_course_students(CourseId::new(0))));
            },
        );
    }

    group.bench_function("has_student_hit", |b| {
        let registry = populated_registry(1_000, 10);
        let mut rng = create_rng(&config);
        b.iter(|| {
            let student = StudentId::new(rng.gen_range(0..1_000));
            black_box(registry.has_student(student))
        });
    });

    group.bench_function("has_student_miss", |b| {
        let registry = populated_registry(1_000, 10);
        b.iter(|| black_box(registry.has_student(StudentId::new(u32::MAX))));
    });

    group.bench_function("stats", |b| {
        let registry = populated_registry(1_000, 100);
        b.iter(|| black_box(registry.stats()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_record_intake,
    bench_associations,
    bench_association_reads
);
criterion_main!(benches);
