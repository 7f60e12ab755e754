//! Benchmark for vize_stencil linter.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vize_stencil::{Linter, Settings};

fn linter() -> Linter {
    Linter::with_settings(Settings::default().with_callees(["classnames", "clsx"]).with_tags(["tw"]))
}

fn bench_lint_jsx(c: &mut Criterion) {
    let mut source = String::from("export function List({ items, size }) {\n  return (\n    <ul>\n");
    for i in 0..100 {
        source.push_str(&format!(
            "      <li key=\"{i}\" className={{classnames(\"flex\", size && `w-${{size}}`, {{ [`h-${{h{i}}}`]: on{i} }})}}>\n        <span class={{on{i} ? `text-${{tone}}` : \"text-gray-500\"}}>item {i}</span>\n      </li>\n",
        ));
    }
    source.push_str("    </ul>\n  );\n}\n");

    let linter = linter();

    let mut group = c.benchmark_group("script");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("lint_jsx_large", |b| {
        b.iter(|| linter.lint_file(black_box(&source), "List.jsx"))
    });

    group.finish();
}

fn bench_lint_sfc(c: &mut Criterion) {
    let mut template = String::new();
    for i in 0..100 {
        template.push_str(&format!(
            "    <div class=\"card\" :class=\"[`p-${{pad}}`, {{ active: a{i} }}]\">\n      <span :class=\"tw`bg-${{c{i}}}`\">{{{{ label{i} }}}}</span>\n    </div>\n",
        ));
    }
    let sfc = format!(
        "<script setup lang=\"ts\">\nconst pad = 4\nconst cls = clsx(`m-${{pad}}`)\n</script>\n\n<template>\n  <section>\n{template}  </section>\n</template>\n"
    );

    let linter = linter();

    let mut group = c.benchmark_group("sfc");
    group.throughput(Throughput::Bytes(sfc.len() as u64));

    group.bench_function("lint_sfc_large", |b| {
        b.iter(|| linter.lint_file(black_box(&sfc), "Cards.vue"))
    });

    group.finish();
}

criterion_group!(benches, bench_lint_jsx, bench_lint_sfc);
criterion_main!(benches);
