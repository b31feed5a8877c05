use criterion::{criterion_group, criterion_main, Criterion};
use stackblur::{
    stack_blur, BlurImageMut, FastBlurChannels, StackBlurContext, ThreadingPolicy,
};

fn synthetic_image(width: u32, height: u32, cn: usize) -> Vec<u8> {
    (0..width as usize * height as usize * cn)
        .map(|i| (i.wrapping_mul(2654435761) >> 13) as u8)
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let rgba = synthetic_image(width, height, 4);
    let rgb = synthetic_image(width, height, 3);

    c.bench_function("stackblur: RGBA stack blur", |b| {
        let mut dst = rgba.clone();
        let mut dst_image =
            BlurImageMut::borrow(&mut dst, width, height, FastBlurChannels::Channels4);
        b.iter(|| {
            stack_blur(&mut dst_image, 77, ThreadingPolicy::Adaptive).unwrap();
        })
    });

    c.bench_function("stackblur: RGBA stack blur ( Single Thread )", |b| {
        let mut dst = rgba.clone();
        let mut dst_image =
            BlurImageMut::borrow(&mut dst, width, height, FastBlurChannels::Channels4);
        b.iter(|| {
            stack_blur(&mut dst_image, 77, ThreadingPolicy::Single).unwrap();
        })
    });

    c.bench_function("stackblur: RGB stack blur ( Single Thread )", |b| {
        let mut dst = rgb.clone();
        let mut dst_image =
            BlurImageMut::borrow(&mut dst, width, height, FastBlurChannels::Channels3);
        b.iter(|| {
            stack_blur(&mut dst_image, 77, ThreadingPolicy::Single).unwrap();
        })
    });

    for radius in [2u32, 16, 128] {
        c.bench_function(
            &format!("stackblur: RGBA context, radius {radius} ( Single Thread )"),
            |b| {
                let mut context = StackBlurContext::new(radius).unwrap();
                let mut dst = rgba.clone();
                let mut dst_image =
                    BlurImageMut::borrow(&mut dst, width, height, FastBlurChannels::Channels4);
                b.iter(|| {
                    context
                        .blur(&mut dst_image, ThreadingPolicy::Single)
                        .unwrap();
                })
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
