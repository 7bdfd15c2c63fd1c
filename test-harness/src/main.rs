//! Registry concurrency harness
//!
//! Hammers a shared registry from multiple writer threads and then checks
//! the invariants the library promises: every record lands, enrollments
//! are symmetric, assignments stay one-sided, and missing ids fail the
//! way they should.
//!
//! Run with:
//!   cargo run -p test-harness -- --threads 8 --students-per-thread 250

use std::sync::{Arc, Barrier};
use std::thread;

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use campus_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use campus_core::{CourseId, FacultyId, Registry, StudentId};

#[derive(Parser, Debug)]
#[command(name = "test-harness")]
#[command(about = "Campus registry concurrency harness", long_about = None)]
struct Args {
    /// Number of writer threads per phase
    #[arg(short, long, default_value = "8")]
    threads: usize,

    /// Students added by each writer thread
    #[arg(short, long, default_value = "250")]
    students_per_thread: u32,

    /// Number of courses shared by all writers
    #[arg(short, long, default_value = "16")]
    courses: u32,

    /// Log level for the run (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level.parse::<LogLevel>()?;
    init_logging_with_config(LogConfig::new(level))?;
    campus_core::core_registry::metrics::init_metrics();

    println!("🎓 Campus Registry Concurrency Harness");
    println!(
        "Writers: {} | Students per writer: {} | Courses: {}",
        args.threads, args.students_per_thread, args.courses
    );
    println!();

    let registry = Arc::new(Registry::new());

    phase_intake(&registry, args.threads, args.students_per_thread, args.courses)?;
    phase_enrollment(&registry, args.threads, args.students_per_thread, args.courses)?;
    phase_assignment(&registry, args.courses)?;
    phase_negative_paths(&registry)?;

    println!();
    println!("🎓 All phases passed");
    Ok(())
}

/// Join a writer thread and surface either its error or its panic.
fn join_writer(handle: thread::JoinHandle<Result<()>>) -> Result<()> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => bail!("writer thread panicked"),
    }
}

fn phase_intake(
    registry: &Arc<Registry>,
    threads: usize,
    per_thread: u32,
    courses: u32,
) -> Result<()> {
    println!("Phase 1: concurrent record intake");

    // Courses go in up front; all of them initially name faculty 0,
    // which is not registered yet. The registry accepts that.
    for c in 0..courses {
        registry.add_course(CourseId::new(c), format!("course-{}", c), FacultyId::new(0))?;
    }

    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|w| {
            let registry = Arc::clone(registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || -> Result<()> {
                barrier.wait();
                let base = w as u32 * per_thread;
                for i in 0..per_thread {
                    registry
                        .add_student(StudentId::new(base + i), format!("student-{}", base + i))?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        join_writer(handle)?;
    }

    let total = threads as u32 * per_thread;
    let stats = registry.stats();
    if stats.students != total as usize {
        bail!("expected {} students, found {}", total, stats.students);
    }
    for id in 0..total {
        if !registry.has_student(StudentId::new(id)) {
            bail!("student {} missing after concurrent intake", id);
        }
    }

    println!("  ✓ {} students landed across {} writers", total, threads);
    Ok(())
}

fn phase_enrollment(
    registry: &Arc<Registry>,
    threads: usize,
    per_thread: u32,
    courses: u32,
) -> Result<()> {
    println!("Phase 2: concurrent enrollment");

    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|w| {
            let registry = Arc::clone(registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || -> Result<()> {
                barrier.wait();
                let base = w as u32 * per_thread;
                for i in 0..per_thread {
                    let student = base + i;
                    registry
                        .enroll_in_course(StudentId::new(student), CourseId::new(student % courses))?;
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        join_writer(handle)?;
    }

    // Every enrollment must be visible from both sides.
    let total = threads as u32 * per_thread;
    for id in 0..total {
        let course = CourseId::new(id % courses);
        if !registry
            .get_student_courses(StudentId::new(id))
            .contains(&course)
        {
            bail!("student {} lost its enrollment in course {}", id, course);
        }
        if !registry
            .get_course_students(course)
            .contains(&StudentId::new(id))
        {
            bail!("roster for course {} is missing student {}", course, id);
        }
    }

    let roster_total: usize = (0..courses)
        .map(|c| registry.get_course_students(CourseId::new(c)).len())
        .sum();
    if roster_total != total as usize {
        bail!(
            "rosters hold {} entries, expected {}",
            roster_total,
            total
        );
    }

    println!("  ✓ {} enrollments symmetric across {} courses", total, courses);
    Ok(())
}

fn phase_assignment(registry: &Arc<Registry>, courses: u32) -> Result<()> {
    println!("Phase 3: assignment bookkeeping");

    for f in 0..4u32 {
        registry.add_faculty(FacultyId::new(f), format!("faculty-{}", f))?;
    }
    for c in 0..courses {
        registry.assign_course(FacultyId::new(c % 4), CourseId::new(c))?;
    }

    for c in 0..courses {
        if !registry
            .get_faculty_courses(FacultyId::new(c % 4))
            .contains(&CourseId::new(c))
        {
            bail!("faculty {} is missing course {}", c % 4, c);
        }

        // Assignment writes the faculty record only; the course still
        // names faculty 0 from intake.
        let course = registry
            .courses()
            .get(CourseId::new(c))
            .ok_or_else(|| anyhow!("course {} vanished", c))?;
        if course.faculty_id != FacultyId::new(0) {
            bail!("course {} record changed teachers on assignment", c);
        }
    }

    println!("  ✓ assignments landed on faculty records only");
    Ok(())
}

fn phase_negative_paths(registry: &Arc<Registry>) -> Result<()> {
    println!("Phase 4: failure paths");

    if registry
        .enroll_in_course(StudentId::new(u32::MAX), CourseId::new(0))
        .is_ok()
    {
        bail!("enrolling an unregistered student unexpectedly succeeded");
    }
    if registry
        .assign_course(FacultyId::new(u32::MAX), CourseId::new(0))
        .is_ok()
    {
        bail!("assigning to an unregistered faculty member unexpectedly succeeded");
    }
    if !registry
        .get_student_courses(StudentId::new(u32::MAX))
        .is_empty()
    {
        bail!("unknown student lookup returned data");
    }
    if !registry
        .get_course_students(CourseId::new(u32::MAX))
        .is_empty()
    {
        bail!("unknown course lookup returned data");
    }

    println!("  ✓ missing ids fail mutations and read as empty");
    Ok(())
}
