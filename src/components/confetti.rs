//! CSS-only confetti burst.
//!
//! Particle paths are derived from low-discrepancy sequences instead of a
//! random source, so a burst looks scattered but renders the same way every
//! time.

use std::f64::consts::PI;

use yew::prelude::*;

use crate::motion::engine::Motion;

pub const PARTICLE_COUNT: usize = 100;
/// Cone width in degrees, centred on straight up.
pub const SPREAD_DEG: f64 = 70.0;
/// Vertical launch point as a fraction of the container height.
pub const ORIGIN_Y: f64 = 0.6;

const GOLDEN: f64 = 0.618_033_988_749_895;
const PLASTIC: f64 = 0.754_877_666_246_693;
const MIN_DISTANCE: f64 = 120.0;
const MAX_DISTANCE: f64 = 320.0;
const PALETTE: &[&str] = &["#FF6B35", "#FFFFFF", "#FFB088", "#F7931E", "#FFD166"];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub dx: f64,
    pub dy: f64,
    pub rotate: f64,
    pub delay_ms: u32,
    pub color: &'static str,
}

fn fract(x: f64) -> f64 {
    x - x.floor()
}

pub fn burst(count: usize, spread_deg: f64) -> Vec<Particle> {
    let spread = spread_deg.clamp(0.0, 360.0).to_radians();
    (0..count)
        .map(|i| {
            let a = fract(i as f64 * GOLDEN);
            let b = fract(i as f64 * PLASTIC);
            let angle = -PI / 2.0 + (a - 0.5) * spread;
            let distance = MIN_DISTANCE + (MAX_DISTANCE - MIN_DISTANCE) * b;
            Particle {
                dx: angle.cos() * distance,
                dy: angle.sin() * distance,
                rotate: a * 720.0 - 360.0,
                delay_ms: (i % 10) as u32 * 15,
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

#[function_component(Confetti)]
pub fn confetti() -> Html {
    let motion = use_context::<Motion>();
    let particles = use_memo(|_| burst(PARTICLE_COUNT, SPREAD_DEG), ());

    if !motion.map(|m| m.is_live()).unwrap_or(false) {
        return html! {};
    }

    html! {
        <div class="confetti" aria-hidden="true">
            <style>
                {r#"
                    .confetti {
                        position: absolute;
                        inset: 0;
                        overflow: visible;
                        pointer-events: none;
                    }
                    .confetti-piece {
                        position: absolute;
                        left: 50%;
                        width: 8px;
                        height: 12px;
                        border-radius: 2px;
                        opacity: 0;
                        animation: confetti-fly 1.6s cubic-bezier(0.215, 0.61, 0.355, 1) forwards;
                    }
                    @keyframes confetti-fly {
                        0% { opacity: 1; transform: translate(0, 0) rotate(0deg); }
                        70% { opacity: 1; }
                        100% {
                            opacity: 0;
                            transform: translate(var(--dx), calc(var(--dy) + 140px)) rotate(var(--rot));
                        }
                    }
                "#}
            </style>
            {
                particles.iter().map(|p| {
                    let style = format!(
                        "top: {}%; background: {}; --dx: {:.1}px; --dy: {:.1}px; --rot: {:.0}deg; animation-delay: {}ms;",
                        ORIGIN_Y * 100.0, p.color, p.dx, p.dy, p.rotate, p.delay_ms
                    );
                    html! { <span class="confetti-piece" {style}></span> }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_has_requested_size_and_is_stable() {
        let first = burst(PARTICLE_COUNT, SPREAD_DEG);
        assert_eq!(first.len(), PARTICLE_COUNT);
        assert_eq!(first, burst(PARTICLE_COUNT, SPREAD_DEG));
    }

    #[test]
    fn narrow_cone_always_launches_upwards() {
        for p in burst(PARTICLE_COUNT, SPREAD_DEG) {
            assert!(p.dy < 0.0, "particle heads down: {:?}", p);
            let distance = p.dx.hypot(p.dy);
            assert!((MIN_DISTANCE - 1e-9..=MAX_DISTANCE + 1e-9).contains(&distance));
        }
    }

    #[test]
    fn particles_spread_to_both_sides() {
        let particles = burst(PARTICLE_COUNT, SPREAD_DEG);
        assert!(particles.iter().any(|p| p.dx < -10.0));
        assert!(particles.iter().any(|p| p.dx > 10.0));
    }

    #[test]
    fn empty_burst() {
        assert!(burst(0, SPREAD_DEG).is_empty());
    }
}
