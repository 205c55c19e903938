use memory_sentinel::guarded;

#[guarded]
fn mix(left: &[f32], right: &[f32], out: &mut [f32]) {
    for ((l, r), o) in left.iter().zip(right).zip(out.iter_mut()) {
        *o = (l + r) * 0.5;
    }
}

async fn peak(samples: &[f32]) -> f32 {
    samples.iter().copied().fold(0.0, f32::max)
}

#[guarded]
async fn normalize(samples: &mut [f32]) {
    let peak = peak(samples).await;
    if peak > 0.0 {
        for s in samples.iter_mut() {
            *s /= peak;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let left = vec![0.5f32; 64];
    let right = vec![0.25f32; 64];
    let mut out = vec![0.0f32; 64];

    mix(&left, &right, &mut out);
    normalize(&mut out).await;
    println!("normalized peak: {}", out[0]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix() {
        let mut out = [0.0f32; 4];
        mix(&[1.0; 4], &[0.0; 4], &mut out);
        assert_eq!(out, [0.5; 4]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_normalize() {
        let mut samples = [1.0f32, 2.0, 4.0];
        normalize(&mut samples).await;
        assert_eq!(samples, [0.25, 0.5, 1.0]);
    }
}
