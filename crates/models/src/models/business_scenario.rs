use crate::enums::PlannerTaskTargetKind;

graph_model! {
    /// Target of a business scenario task.
    pub struct BusinessScenarioTaskTargetBase = "#microsoft.graph.businessScenarioTaskTargetBase" {
        task_target_kind / set_task_target_kind: PlannerTaskTargetKind => "taskTargetKind",
    }
}

graph_model! {
    pub struct BusinessScenarioGroupTarget: BusinessScenarioTaskTargetBase = "#microsoft.graph.businessScenarioGroupTarget" {
        /// Id of the group the task is assigned to.
        group_id / set_group_id: String => "groupId",
    }
}
