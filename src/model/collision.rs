use super::*;

/// Whether the attacker's attack box touches the defender's body.
/// Edges count: boxes that merely touch overlap.
pub fn overlaps(attacker: &Fighter, defender: &Fighter) -> bool {
    boxes_touch(attacker.attack_box.aabb(), defender.body())
}

fn boxes_touch(a: Aabb2<f32>, b: Aabb2<f32>) -> bool {
    a.max.x >= b.min.x && a.min.x <= b.max.x && a.max.y >= b.min.y && a.min.y <= b.max.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::*;

    fn pair(gap: f32) -> (Fighter, Fighter) {
        let mut attacker = fighter(false);
        attacker.attack_box.position = vec2(100.0, 50.0);
        let mut defender = fighter(false);
        // attack box spans x in [100, 260]
        defender.sprite.position = vec2(260.0 + gap, 0.0);
        (attacker, defender)
    }

    #[test]
    fn test_touching_edges_overlap() {
        let (attacker, defender) = pair(0.0);
        assert!(overlaps(&attacker, &defender));
    }

    #[test]
    fn test_gap_separates() {
        let (attacker, defender) = pair(0.5);
        assert!(!overlaps(&attacker, &defender));
    }

    #[test]
    fn test_vertical_separation() {
        let (attacker, mut defender) = pair(-10.0);
        assert!(overlaps(&attacker, &defender));
        // attack box spans y in [50, 100]
        defender.sprite.position.y = 100.0;
        assert!(overlaps(&attacker, &defender));
        defender.sprite.position.y = 101.0;
        assert!(!overlaps(&attacker, &defender));
        defender.sprite.position.y = -100.0;
        assert!(overlaps(&attacker, &defender));
        defender.sprite.position.y = -101.0;
        assert!(!overlaps(&attacker, &defender));
    }

    #[test]
    fn test_direction_matters() {
        let (attacker, mut defender) = pair(0.0);
        defender.attack_box.position = vec2(1000.0, 1000.0);
        assert!(overlaps(&attacker, &defender));
        assert!(!overlaps(&defender, &attacker));
    }
}
