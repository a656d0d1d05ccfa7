//! Ad-hoc schema patches for the Study-Flow Postgres database.
//!
//! Every statement carries an `IF NOT EXISTS` guard so the plan can be
//! re-run against an already-patched database without errors. Patches are
//! independent; ordering only follows natural foreign-key prerequisites.

pub struct SchemaPatch {
    pub name: &'static str,
    pub description: &'static str,
    pub statements: &'static [&'static str],
}

pub const PATCH_PLAN: &[SchemaPatch] = &[
    SchemaPatch {
        name: "tasks.study_plan_id",
        description: "link tasks to study plans",
        statements: &[
            r#"
            ALTER TABLE public.tasks
            ADD COLUMN IF NOT EXISTS study_plan_id UUID REFERENCES public.study_plans(id) ON DELETE SET NULL;
            "#,
            r#"
            CREATE INDEX IF NOT EXISTS idx_tasks_study_plan_id ON public.tasks(study_plan_id);
            "#,
        ],
    },
    SchemaPatch {
        name: "study_goals",
        description: "ensure the study_goals table exists",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS public.study_goals (
                id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
                user_id UUID REFERENCES auth.users(id) ON DELETE CASCADE NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                target_date DATE,
                progress INTEGER DEFAULT 0,
                is_completed BOOLEAN DEFAULT false,
                created_at TIMESTAMPTZ DEFAULT NOW(),
                updated_at TIMESTAMPTZ DEFAULT NOW()
            );
            "#,
            r#"
            CREATE INDEX IF NOT EXISTS idx_study_goals_user_id ON public.study_goals(user_id);
            "#,
        ],
    },
    SchemaPatch {
        name: "tasks recurrence",
        description: "recurrence pattern and parent-task link on tasks",
        statements: &[
            r#"
            ALTER TABLE public.tasks
            ADD COLUMN IF NOT EXISTS recurrence_pattern TEXT,
            ADD COLUMN IF NOT EXISTS parent_task_id UUID REFERENCES public.tasks(id) ON DELETE CASCADE;
            "#,
        ],
    },
    SchemaPatch {
        name: "study_sessions notes",
        description: "session notes and mood rating on study_sessions",
        statements: &[
            r#"
            ALTER TABLE public.study_sessions
            ADD COLUMN IF NOT EXISTS session_notes TEXT,
            ADD COLUMN IF NOT EXISTS mood_rating INTEGER CHECK (mood_rating >= 1 AND mood_rating <= 5);
            "#,
        ],
    },
];
