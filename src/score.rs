use crate::ball::WallHit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score_top: u32,
    score_bottom: u32,
}

impl Scoreboard {
    pub fn top_scores(&mut self) {
        self.score_top += 1;
    }

    pub fn bottom_scores(&mut self) {
        self.score_bottom += 1;
    }

    pub fn reset_state(&mut self) {
        *self = Self::default();
    }

    pub fn score_top(&self) -> u32 {
        self.score_top
    }

    pub fn score_bottom(&self) -> u32 {
        self.score_bottom
    }

    /// Credits the player who defended the opposite wall.
    pub fn record(&mut self, hit: WallHit) {
        match hit {
            WallHit::Top => self.bottom_scores(),
            WallHit::Bottom => self.top_scores(),
            WallHit::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_wall_hits_credit_top_player() {
        let mut scores = Scoreboard::default();
        for _ in 0..3 {
            scores.record(WallHit::Bottom);
        }
        assert_eq!(scores.score_top(), 3);
        assert_eq!(scores.score_bottom(), 0);
    }

    #[test]
    fn top_wall_hit_credits_bottom_player() {
        let mut scores = Scoreboard::default();
        scores.record(WallHit::Top);
        scores.record(WallHit::None);
        assert_eq!((scores.score_top(), scores.score_bottom()), (0, 1));
    }

    #[test]
    fn reset_zeroes_both() {
        let mut scores = Scoreboard::default();
        scores.top_scores();
        scores.bottom_scores();
        scores.reset_state();
        assert_eq!(scores, Scoreboard::default());
    }
}
