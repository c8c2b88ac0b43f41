use std::sync::LazyLock;

use atria_core::models::domain::Subdomain;

use crate::Instrument;
use crate::catalog::{Catalog, Item};

pub const QUESTION_COUNT: usize = 77;

/// Strength 360: 77 forced-choice items across the four talent domains.
/// Each item pits two statements from different themes against each other
/// (item 54 offers two Achiever statements).
pub struct Strength360;

impl Instrument for Strength360 {
    fn id(&self) -> &str {
        "strength360"
    }

    fn name(&self) -> &str {
        "Strength 360"
    }

    fn catalog(&self) -> &Catalog {
        builtin_catalog()
    }
}

/// The shipped Strength 360 catalog, built on first use.
///
/// # Panics
///
/// Panics on first access if the table below fails validation. The table is
/// a compile-time constant, so that indicates an edit error in this file.
pub fn builtin_catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::new(items())
            .unwrap_or_else(|e| panic!("built-in Strength 360 catalog is invalid: {e}"))
    });
    &CATALOG
}

fn item(id: u16, a: (Subdomain, &str), b: (Subdomain, &str)) -> Item {
    Item {
        id,
        statement_a: a.1.to_string(),
        statement_b: b.1.to_string(),
        theme_a: a.0,
        theme_b: b.0,
    }
}

fn items() -> Vec<Item> {
    use Subdomain::*;

    vec![
        item(
            1,
            (Achiever, "I feel a deep satisfaction when I cross a task off my to-do list."),
            (Command, "I naturally take the lead in group situations."),
        ),
        item(
            2,
            (Responsibility, "I am known for being reliable and following through on my promises."),
            (Woo, "I enjoy persuading others to see my point of view."),
        ),
        item(
            3,
            (Achiever, "I need to be productive to feel good about my day."),
            (Woo, "I am comfortable selling an idea or a product."),
        ),
        item(
            4,
            (Discipline, "I create routines to make my work more efficient."),
            (Communication, "I like to be the one who speaks up in meetings."),
        ),
        item(
            5,
            (Responsibility, "I take pride in my strong work ethic."),
            (Woo, "I find it easy to start a conversation with strangers."),
        ),
        item(
            6,
            (Discipline, "I get frustrated by disorganization and lack of structure."),
            (Competition, "I am energized by friendly competition."),
        ),
        item(
            7,
            (Consistency, "I believe success comes from consistent, hard work."),
            (Significance, "I believe success comes from making a visible impact."),
        ),
        item(
            8,
            (Focus, "I prefer to have a clear plan before starting a project."),
            (SelfAssurance, "I am confident in my ability to take risks."),
        ),
        item(
            9,
            (Restorative, "I am the person who will fix a problem that everyone else is ignoring."),
            (Activator, "I am the person who will rally the team when energy is low."),
        ),
        item(
            10,
            (Discipline, "I am meticulous about the details of my work."),
            (Woo, "I love the challenge of winning someone over."),
        ),
        item(
            11,
            (Responsibility, "I feel a strong sense of ownership over my commitments."),
            (Command, "I naturally command attention when I enter a room."),
        ),
        item(
            12,
            (Consistency, "I value stability and predictable outcomes."),
            (Significance, "I am motivated by the desire to be recognized for my work."),
        ),
        item(
            13,
            (Arranger, "I enjoy the process of organizing people and resources."),
            (Activator, "I get bored easily and like to initiate new actions."),
        ),
        item(
            14,
            (Belief, "My core values are my compass for making decisions."),
            (SelfAssurance, "I am optimistic about my ability to succeed."),
        ),
        item(
            15,
            (Deliberative, "I am careful and cautious when making important decisions."),
            (Communication, "I am often described as charismatic or persuasive."),
        ),
        item(
            16,
            (Includer, "I am good at making people feel comfortable and included."),
            (Futuristic, "I am constantly thinking about what could be in the future."),
        ),
        item(
            17,
            (Individualization, "I am fascinated by what makes each person unique."),
            (Analytical, "I enjoy analyzing data and patterns to find the root cause."),
        ),
        item(
            18,
            (Relator, "I am the glue that holds my friend group or team together."),
            (Learner, "I love learning new things, simply for the sake of learning."),
        ),
        item(
            19,
            (Empathy, "I am highly empathetic and can easily sense how others are feeling."),
            (Strategic, "I am a strategic thinker who always has a contingency plan."),
        ),
        item(
            20,
            (Connectedness, "I believe that almost everything happens for a reason."),
            (Ideation, "I am fascinated by innovative ideas and concepts."),
        ),
        item(
            21,
            (Developer, "I derive joy from helping others grow and succeed."),
            (Intellection, "I enjoy thought-provoking, intellectual debates."),
        ),
        item(
            22,
            (Harmony, "I avoid conflict and seek harmony and consensus."),
            (Input, "I love collecting information, ideas, or interesting facts."),
        ),
        item(
            23,
            (Relator, "I prefer deep, one-on-one relationships to large social gatherings."),
            (Context, "I understand the present by studying the past."),
        ),
        item(
            24,
            (Adaptability, "I am adaptable and can easily go with the flow."),
            (Ideation, "I am always asking \"why?\" and \"what if?\""),
        ),
        item(
            25,
            (Includer, "I am intentional about including people who might be left out."),
            (Strategic, "I can quickly identify the best path forward among many options."),
        ),
        item(
            26,
            (Positivity, "I am a positive person who can lift the mood of a room."),
            (Analytical, "I am a logical and objective thinker."),
        ),
        item(
            27,
            (Developer, "I build trust through genuine, caring relationships."),
            (Strategic, "I trust my insights and intuition when solving problems."),
        ),
        item(
            28,
            (Harmony, "I am skilled at helping diverse people work together productively."),
            (Analytical, "I am skilled at simplifying complex problems."),
        ),
        item(
            29,
            (Connectedness, "I feel connected to humanity and the world around me."),
            (Intellection, "I spend a lot of time thinking inside my own head."),
        ),
        item(
            30,
            (Developer, "I am patient and enjoy seeing small signs of progress in others."),
            (Ideation, "I get excited by brainstorming and generating new possibilities."),
        ),
        item(
            31,
            (Achiever, "I need to be busy and accomplishing tasks."),
            (Learner, "I need to be learning and thinking."),
        ),
        item(
            32,
            (Significance, "I want to be recognized for my achievements."),
            (Relator, "I want to be known as a trustworthy and loyal friend."),
        ),
        item(
            33,
            (Significance, "I am driven by a desire to make a difference."),
            (Analytical, "I am driven by a desire to understand how things work."),
        ),
        item(
            34,
            (Activator, "I am great at starting projects."),
            (Achiever, "I am great at finishing projects."),
        ),
        item(
            35,
            (Maximizer, "I focus on people's strengths and how to maximize them."),
            (Restorative, "I focus on problems and how to solve them."),
        ),
        item(
            36,
            (Futuristic, "I am inspired by a clear and vivid vision of the future."),
            (Relator, "I am inspired by collaborating with a close-knit team."),
        ),
        item(
            37,
            (Achiever, "I set ambitious goals for myself."),
            (Ideation, "I enjoy exploring interesting ideas, even with no clear goal."),
        ),
        item(
            38,
            (SelfAssurance, "I am independent and like to control my own destiny."),
            (Adaptability, "I am adaptable and can thrive in changing circumstances."),
        ),
        item(
            39,
            (Consistency, "I believe in treating everyone with consistent fairness."),
            (Individualization, "I believe in tailoring my approach to each individual."),
        ),
        item(
            40,
            (Focus, "I am a pragmatic \"how-to\" person."),
            (Strategic, "I am a \"big picture\" thinker."),
        ),
        item(
            41,
            (Competition, "I am motivated by winning and being the best."),
            (Learner, "I am motivated by personal growth and improvement."),
        ),
        item(
            42,
            (Discipline, "I am disciplined and create order."),
            (Adaptability, "I am flexible and can juggle multiple things at once."),
        ),
        item(
            43,
            (Positivity, "I bring energy and enthusiasm to a team."),
            (Analytical, "I bring logic and a calm analysis to a team."),
        ),
        item(
            44,
            (Belief, "I am deeply committed to my core values."),
            (Learner, "I am deeply curious about a wide range of topics."),
        ),
        item(
            45,
            (Achiever, "I am a doer."),
            (Intellection, "I am a thinker."),
        ),
        item(
            46,
            (Communication, "I am a talker."),
            (Empathy, "I am a listener."),
        ),
        item(
            47,
            (Individualization, "I see the unique potential in every person."),
            (Strategic, "I see the strategic patterns in every situation."),
        ),
        item(
            48,
            (SelfAssurance, "I am determined to be in charge of my own life."),
            (Developer, "I am dedicated to helping others succeed in theirs."),
        ),
        item(
            49,
            (Achiever, "I get things done."),
            (Futuristic, "I imagine what could be."),
        ),
        item(
            50,
            (Command, "I make sure my voice is heard."),
            (Harmony, "I make sure everyone else's voice is heard."),
        ),
        item(
            51,
            (Focus, "I am focused on efficiency and progress."),
            (Harmony, "I am focused on harmony and morale."),
        ),
        item(
            52,
            (SelfAssurance, "I am confident in my own decisions."),
            (Deliberative, "I am thoughtful and consider all options before deciding."),
        ),
        item(
            53,
            (Relator, "I am the one who remembers everyone's personal story."),
            (Input, "I am the one who remembers the key data points."),
        ),
        item(
            54,
            (Achiever, "I am motivated by deadlines."),
            (Achiever, "I am motivated by new challenges."),
        ),
        item(
            55,
            (Significance, "I like to be the center of attention."),
            (Harmony, "I prefer to work behind the scenes."),
        ),
        item(
            56,
            (Discipline, "I am a planner."),
            (Adaptability, "I am an improviser."),
        ),
        item(
            57,
            (Responsibility, "I am serious and responsible."),
            (Positivity, "I am upbeat and positive."),
        ),
        item(
            58,
            (Competition, "I am competitive."),
            (Harmony, "I am cooperative."),
        ),
        item(
            59,
            (Achiever, "I am a hard worker."),
            (Ideation, "I am a creative thinker."),
        ),
        item(
            60,
            (Command, "I am direct and assertive."),
            (Harmony, "I am diplomatic and tactful."),
        ),
        item(
            61,
            (Discipline, "I am organized and structured."),
            (Adaptability, "I am spontaneous and adaptable."),
        ),
        item(
            62,
            (Activator, "I am a person of action."),
            (Intellection, "I am a person of reflection."),
        ),
        item(
            63,
            (Significance, "I am motivated by external recognition."),
            (Intellection, "I am motivated by internal satisfaction."),
        ),
        item(
            64,
            (Analytical, "I am a realist."),
            (Positivity, "I am an optimist."),
        ),
        item(
            65,
            (Learner, "I am a specialist who deepens expertise."),
            (Ideation, "I am a generalist who connects ideas."),
        ),
        item(
            66,
            (Achiever, "I am driven to complete tasks."),
            (Relator, "I am driven to connect with people."),
        ),
        item(
            67,
            (Restorative, "I am a problem-solver."),
            (Maximizer, "I am a motivator."),
        ),
        item(
            68,
            (Focus, "I am focused on the outcome."),
            (Analytical, "I am focused on the process."),
        ),
        item(
            69,
            (Command, "I am a decision-maker."),
            (Harmony, "I am a consensus-builder."),
        ),
        item(
            70,
            (Learner, "I am a teacher who shares knowledge."),
            (Developer, "I am a mentor who nurtures growth."),
        ),
        item(
            71,
            (Discipline, "I am precise and accurate."),
            (Ideation, "I am imaginative and innovative."),
        ),
        item(
            72,
            (Consistency, "I am a stabilizer who creates routine."),
            (Activator, "I am a catalyst who creates change."),
        ),
        item(
            73,
            (Belief, "I am loyal to my principles."),
            (Relator, "I am loyal to my team."),
        ),
        item(
            74,
            (Strategic, "I am the one who defines the goal."),
            (Arranger, "I am the one who organizes the plan to reach it."),
        ),
        item(
            75,
            (Communication, "I am a public speaker."),
            (Intellection, "I am a private thinker."),
        ),
        item(
            76,
            (Achiever, "I am a finisher."),
            (Activator, "I am a starter."),
        ),
        item(
            77,
            (Achiever, "My greatest joy is achievement."),
            (Relator, "My greatest joy is connection."),
        ),
    ]
}
