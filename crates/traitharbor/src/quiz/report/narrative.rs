use super::bands::ScoreBand;
use crate::quiz::domain::PersonalityTrait;

pub(crate) const fn trait_summary(
    personality_trait: PersonalityTrait,
    band: ScoreBand,
) -> &'static str {
    match (personality_trait, band) {
        (PersonalityTrait::Openness, ScoreBand::Low) => {
            "You prefer the familiar and practical, favouring proven routines over novelty."
        }
        (PersonalityTrait::Openness, ScoreBand::Average) => {
            "You balance curiosity with practicality, exploring new ideas when they feel useful."
        }
        (PersonalityTrait::Openness, ScoreBand::High) => {
            "You are curious and imaginative, drawn to new experiences, art, and abstract ideas."
        }
        (PersonalityTrait::Conscientiousness, ScoreBand::Low) => {
            "You work spontaneously and flexibly, and may find strict plans confining."
        }
        (PersonalityTrait::Conscientiousness, ScoreBand::Average) => {
            "You are reasonably organised and dependable while leaving room for flexibility."
        }
        (PersonalityTrait::Conscientiousness, ScoreBand::High) => {
            "You are organised, disciplined, and persistent in reaching your goals."
        }
        (PersonalityTrait::Extraversion, ScoreBand::Low) => {
            "You recharge in quiet settings and prefer smaller groups to large crowds."
        }
        (PersonalityTrait::Extraversion, ScoreBand::Average) => {
            "You enjoy company and solitude in roughly equal measure."
        }
        (PersonalityTrait::Extraversion, ScoreBand::High) => {
            "You draw energy from people and activity, and seek out social situations."
        }
        (PersonalityTrait::Agreeableness, ScoreBand::Low) => {
            "You are direct and competitive, putting candour ahead of keeping the peace."
        }
        (PersonalityTrait::Agreeableness, ScoreBand::Average) => {
            "You are generally cooperative but will stand your ground when it matters."
        }
        (PersonalityTrait::Agreeableness, ScoreBand::High) => {
            "You are warm, trusting, and considerate, and value getting along with others."
        }
        (PersonalityTrait::Neuroticism, ScoreBand::Low) => {
            "You stay calm and even-tempered, and recover quickly from setbacks."
        }
        (PersonalityTrait::Neuroticism, ScoreBand::Average) => {
            "You experience ordinary ups and downs and usually regain your balance."
        }
        (PersonalityTrait::Neuroticism, ScoreBand::High) => {
            "You feel stress and negative emotions keenly and may worry more than most."
        }
    }
}
