use criterion::{Criterion, black_box, criterion_group, criterion_main};

use boardroom_auth::{Role, RoleHierarchy, RoleTier};

fn bench_satisfies_any(c: &mut Criterion) {
    let standard = RoleHierarchy::standard();
    let held = [Role::new("praktikant"), Role::MANAGEMENT];
    let required = [Role::EXECUTIVE, Role::MANAGEMENT];

    c.bench_function("satisfies_any/standard", |b| {
        b.iter(|| standard.satisfies_any(black_box(&held), black_box(&required)))
    });

    let wide = RoleHierarchy::new((1..=64u32).map(|w| RoleTier::new(Role::new(format!("tier-{w}")), w)))
        .unwrap();
    let held: Vec<Role> = (1..=8).map(|w| Role::new(format!("tier-{w}"))).collect();
    let required = [Role::new("tier-64"), Role::new("tier-8")];

    c.bench_function("satisfies_any/64_tiers", |b| {
        b.iter(|| wide.satisfies_any(black_box(&held), black_box(&required)))
    });
}

criterion_group!(benches, bench_satisfies_any);
criterion_main!(benches);
